//! E2 protocol element toolkit
//!
//! Builds the E2AP and E2SM structures a simulated E2 node sends to a RIC:
//! Error Indication, E2SM-KPM v2 RAN function descriptions and indications,
//! the E2SM-KPM v1 slice/QoS header and E2SM-RC v1 indications.
//!
//! # Modules
//!
//! - `schema` - Fixed protocol structures and their constraint checks
//! - `e2ap` - E2AP procedure messages
//! - `kpm` / `kpm_v1` / `rc` - Service model builders
//! - `codec` - Canonical encoding and the service model codec seam
//! - `transaction` - Transaction identifier pool

pub mod codec;
pub mod e2ap;
pub mod error;
pub mod kpm;
pub mod kpm_v1;
pub mod rc;
pub mod schema;
pub mod transaction;

pub use codec::{decode_canonical, encode_canonical, ServiceModelCodec, WireKind};
pub use error::{E2Error, EncodingError, Result};
pub use schema::Validate;
pub use transaction::{TransactionId, TransactionIdPool};
