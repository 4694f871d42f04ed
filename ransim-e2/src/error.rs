//! Error types for the E2 toolkit

use thiserror::Error;

/// Failure raised by the delegated encoding path.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The built structure could not be turned into its canonical byte form
    #[error("canonical encoding failed: {0}")]
    Canonical(String),

    /// The service model rejected the canonical bytes
    #[error("service model {model} failed: {reason}")]
    ServiceModel {
        /// Service model short name
        model: String,
        /// Reason reported by the service model
        reason: String,
    },
}

/// Errors returned by the transaction pool and the protocol element builders.
#[derive(Debug, Error)]
pub enum E2Error {
    /// Every transaction identifier is currently allocated
    #[error("no free transaction identifier (capacity {capacity})")]
    ResourceExhausted {
        /// Pool capacity
        capacity: usize,
    },

    /// A fixed-shape field was given a value of the wrong shape
    #[error("invalid {field}: {reason}")]
    StructuralInvalid {
        /// Field name
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The assembled structure violates a schema constraint
    #[error("{structure} failed validation: {reason}")]
    ValidationFailed {
        /// Structure name
        structure: &'static str,
        /// Violated constraint
        reason: String,
    },

    /// Delegated encoding failed
    #[error("encoding failed: {0}")]
    EncodingFailed(#[from] EncodingError),
}

impl E2Error {
    pub(crate) fn structural(field: &'static str, reason: impl Into<String>) -> Self {
        E2Error::StructuralInvalid {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(structure: &'static str, reason: impl Into<String>) -> Self {
        E2Error::ValidationFailed {
            structure,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, E2Error>;
