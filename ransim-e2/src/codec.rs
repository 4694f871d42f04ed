//! Canonical encoding and the service model codec seam
//!
//! Built structures leave this crate in two steps. They are first serialized
//! into a canonical byte form (JSON over the serde derive of the schema
//! types), then a [`ServiceModelCodec`] supplied by the caller turns those
//! bytes into the service model's on-air encoding (APER for E2SM-KPM and
//! E2SM-RC). This crate never performs the bit-level encoding itself.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use ransim_common::logging::{log_e2_message, Direction};

use crate::error::{E2Error, EncodingError};

/// Serializes a built structure into its canonical byte form.
pub fn encode_canonical<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodingError> {
    serde_json::to_vec(value).map_err(|e| EncodingError::Canonical(e.to_string()))
}

/// Parses a structure back out of its canonical byte form.
pub fn decode_canonical<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, EncodingError> {
    serde_json::from_slice(bytes).map_err(|e| EncodingError::Canonical(e.to_string()))
}

/// External service model converting canonical bytes to wire bytes.
///
/// Implementations typically wrap an ASN.1 APER encoder for one E2SM.
pub trait ServiceModelCodec {
    /// Error reported by the service model
    type Error: std::fmt::Display;

    /// Service model short name, used in errors and logs.
    fn name(&self) -> &str;

    /// Encodes an indication header.
    fn indication_header_to_wire(&self, canonical: &[u8]) -> Result<Bytes, Self::Error>;

    /// Encodes an indication message.
    fn indication_message_to_wire(&self, canonical: &[u8]) -> Result<Bytes, Self::Error>;

    /// Encodes a RAN function description.
    fn ran_function_description_to_wire(&self, canonical: &[u8]) -> Result<Bytes, Self::Error>;
}

/// Which service model conversion a structure goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireKind {
    /// Indication header
    IndicationHeader,
    /// Indication message
    IndicationMessage,
    /// RAN function description
    RanFunctionDescription,
}

impl WireKind {
    fn as_str(self) -> &'static str {
        match self {
            WireKind::IndicationHeader => "indication header",
            WireKind::IndicationMessage => "indication message",
            WireKind::RanFunctionDescription => "RAN function description",
        }
    }
}

/// Runs both encoding steps for a built structure.
pub fn to_wire<T, C>(value: &T, kind: WireKind, codec: &C) -> Result<Bytes, E2Error>
where
    T: Serialize,
    C: ServiceModelCodec + ?Sized,
{
    let canonical = encode_canonical(value).inspect_err(|e| {
        tracing::warn!(kind = kind.as_str(), error = %e, "canonical encoding failed");
    })?;

    let result = match kind {
        WireKind::IndicationHeader => codec.indication_header_to_wire(&canonical),
        WireKind::IndicationMessage => codec.indication_message_to_wire(&canonical),
        WireKind::RanFunctionDescription => codec.ran_function_description_to_wire(&canonical),
    };

    let wire = result.map_err(|e| {
        tracing::warn!(
            model = codec.name(),
            kind = kind.as_str(),
            error = %e,
            "service model encoding failed"
        );
        EncodingError::ServiceModel {
            model: codec.name().to_string(),
            reason: e.to_string(),
        }
    })?;

    log_e2_message(Direction::Tx, kind.as_str(), &wire);
    Ok(wire)
}
