//! Common types and utilities for ransim
//!
//! This crate provides the error type, logging setup, configuration, network
//! identity types and classification tables shared by the ransim crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod measurement;
pub mod range_table;
pub mod types;

pub use config::{E2ToolkitConfig, RanFunctionConfig};
pub use error::Error;
pub use logging::{
    format_hex_compact, init_logging, init_logging_with_filter, log_e2_message, Direction,
    HexDump, LogLevel,
};
pub use measurement::{classify_qoffset, classify_time_to_trigger, QOffsetRange, TimeToTrigger};
pub use range_table::{RangeEntry, RangeTable};
pub use types::{Plmn, SNssai};
