//! Logging infrastructure for ransim
//!
//! Configurable logging on top of the `tracing` crate plus helpers for
//! dumping encoded E2 payloads while debugging.

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warn level
    Warn,
    /// Error level - least verbose
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// Initialize the tracing subscriber with the specified log level.
///
/// Call once at application startup. `RUST_LOG` overrides `level`.
///
/// # Example
///
/// ```no_run
/// use ransim_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.to_string());
}

/// Initialize logging with a custom filter string.
///
/// # Example
///
/// ```no_run
/// use ransim_common::logging::init_logging_with_filter;
///
/// // Default to info, but trace the transaction pool
/// init_logging_with_filter("info,ransim_e2::transaction=trace");
/// ```
pub fn init_logging_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // A second init (tests, embedding applications) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}

/// Message direction for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Incoming/received message
    Rx,
    /// Outgoing/transmitted message
    Tx,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rx => write!(f, "RX"),
            Direction::Tx => write!(f, "TX"),
        }
    }
}

/// Log an encoded E2 payload at debug level, with a hex dump at trace level.
///
/// # Arguments
///
/// * `direction` - Message direction (RX or TX)
/// * `msg_type` - Message type description, e.g. "KPM Indication Header"
/// * `data` - Encoded bytes
pub fn log_e2_message(direction: Direction, msg_type: &str, data: &[u8]) {
    tracing::debug!(
        direction = %direction,
        msg_type = msg_type,
        len = data.len(),
        "{} E2 message",
        direction
    );
    tracing::trace!(
        msg_type = msg_type,
        hex = %HexDump(data),
        "E2 payload"
    );
}

/// Wrapper for hex dump formatting
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Format bytes as a compact hex string with optional grouping.
///
/// # Example
///
/// ```
/// use ransim_common::logging::format_hex_compact;
///
/// let data = [0x12, 0x34, 0x56, 0x78];
/// assert_eq!(format_hex_compact(&data, 0), "12345678");
/// assert_eq!(format_hex_compact(&data, 2), "1234 5678");
/// ```
pub fn format_hex_compact(data: &[u8], group_size: usize) -> String {
    if group_size == 0 {
        return hex::encode(data);
    }

    data.chunks(group_size)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_into_tracing_level() {
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_hex_compact_grouping() {
        let data = [0xde, 0xad, 0xbe, 0xef];
        assert_eq!(format_hex_compact(&data, 1), "de ad be ef");
        assert_eq!(format!("{}", HexDump(&data)), "deadbeef");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(LogLevel::Debug);
        init_logging_with_filter("warn");
        log_e2_message(Direction::Tx, "probe", &[0x01, 0x02]);
    }
}
