//! Integration test framework for the ransim E2 toolkit
//!
//! # Components
//!
//! - [`mock_codec`] - Recording service model codec
//! - [`test_fixtures`] - Shared identities and leaf structures
//! - [`test_utils`] - Logging setup for tests
//!
//! # Test Categories
//!
//! 1. **RAN function description** - Composing leaf builders into an RFD
//! 2. **Error indication** - Tagging messages with pooled transaction ids
//! 3. **Indications** - KPM and RC headers/messages through a codec
//! 4. **Measurement ranges** - Offset and time-to-trigger classification

pub mod mock_codec;
pub mod test_fixtures;
pub mod test_utils;

pub use mock_codec::{MockCodec, MockCodecCall};
pub use test_utils::{init_test_logging, TestResult};
