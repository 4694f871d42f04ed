//! E2SM-RC v1 builders

pub mod indication_header;
pub mod indication_message;
pub mod ue_id;

pub use indication_header::{IndicationHeaderFormat1Builder, IndicationHeaderFormat2Builder};
pub use indication_message::IndicationMessageFormat5Builder;
pub use ue_id::GnbUeidBuilder;
