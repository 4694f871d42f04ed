//! E2 toolkit configuration
//!
//! Loaded from YAML. Every field carries a default so an empty document is a
//! valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::logging::LogLevel;

/// Largest transaction pool accepted by [`E2ToolkitConfig::validate`].
pub const MAX_TRANSACTION_ID_CAPACITY: usize = 65536;

/// Default pool size, covering the E2AP TransactionID range 0..=255.
pub const DEFAULT_TRANSACTION_ID_CAPACITY: usize = 256;

/// Identity advertised for one RAN function (service model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RanFunctionConfig {
    /// Service model short name, e.g. "ORAN-E2SM-KPM"
    pub short_name: String,
    /// Service model object identifier
    pub oid: String,
    /// Human readable description
    pub description: String,
    /// RAN function instance
    #[serde(default)]
    pub instance: Option<i32>,
}

impl RanFunctionConfig {
    /// KPM v2 defaults.
    pub fn kpm() -> Self {
        Self {
            short_name: "ORAN-E2SM-KPM".to_string(),
            oid: "1.3.6.1.4.1.53148.1.2.2.2".to_string(),
            description: "KPM 2.0 Monitor".to_string(),
            instance: Some(1),
        }
    }

    fn validate(&self, section: &str) -> Result<(), Error> {
        if self.short_name.is_empty() {
            return Err(Error::Config(format!("{section}.short_name must not be empty")));
        }
        if self.oid.is_empty() {
            return Err(Error::Config(format!("{section}.oid must not be empty")));
        }
        let well_formed = self
            .oid
            .split('.')
            .all(|arc| !arc.is_empty() && arc.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(Error::Config(format!(
                "{section}.oid is not a dotted object identifier: {}",
                self.oid
            )));
        }
        Ok(())
    }
}

fn default_kpm() -> RanFunctionConfig {
    RanFunctionConfig::kpm()
}

fn default_capacity() -> usize {
    DEFAULT_TRANSACTION_ID_CAPACITY
}

/// Top-level toolkit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct E2ToolkitConfig {
    /// Size of the transaction identifier namespace
    #[serde(default = "default_capacity")]
    pub transaction_id_capacity: usize,
    /// Log level passed to [`crate::logging::init_logging`]
    #[serde(default)]
    pub log_level: LogLevel,
    /// KPM RAN function identity
    #[serde(default = "default_kpm")]
    pub kpm: RanFunctionConfig,
}

impl Default for E2ToolkitConfig {
    fn default() -> Self {
        Self {
            transaction_id_capacity: DEFAULT_TRANSACTION_ID_CAPACITY,
            log_level: LogLevel::default(),
            kpm: RanFunctionConfig::kpm(),
        }
    }
}

impl E2ToolkitConfig {
    /// Parses and validates a configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use ransim_common::config::E2ToolkitConfig;
    ///
    /// let config = E2ToolkitConfig::from_yaml_str("transaction_id_capacity: 16").unwrap();
    /// assert_eq!(config.transaction_id_capacity, 16);
    /// assert_eq!(config.kpm.short_name, "ORAN-E2SM-KPM");
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        // serde_yaml rejects an empty document, treat it as all defaults
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=MAX_TRANSACTION_ID_CAPACITY).contains(&self.transaction_id_capacity) {
            return Err(Error::Config(format!(
                "transaction_id_capacity must be in 1..={MAX_TRANSACTION_ID_CAPACITY}, got {}",
                self.transaction_id_capacity
            )));
        }
        self.kpm.validate("kpm")?;
        Ok(())
    }
}
