//! Mock service model codec
//!
//! Records every conversion it is asked to perform and returns the canonical
//! bytes behind a one-byte kind tag, or fails on demand.

use std::sync::Mutex;

use bytes::{BufMut, Bytes, BytesMut};
use ransim_e2::{ServiceModelCodec, WireKind};

/// Tag prefixed to encoded indication headers
pub const HEADER_TAG: u8 = 0x01;
/// Tag prefixed to encoded indication messages
pub const MESSAGE_TAG: u8 = 0x02;
/// Tag prefixed to encoded RAN function descriptions
pub const RAN_FUNCTION_TAG: u8 = 0x03;

/// One recorded conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCodecCall {
    /// Conversion requested
    pub kind: WireKind,
    /// Canonical bytes handed over
    pub canonical: Vec<u8>,
}

/// Recording codec
#[derive(Debug, Default)]
pub struct MockCodec {
    name: String,
    failure: Option<String>,
    calls: Mutex<Vec<MockCodecCall>>,
}

impl MockCodec {
    /// Creates a codec that accepts everything.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates a codec that rejects everything with `reason`.
    pub fn failing(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure: Some(reason.into()),
            ..Default::default()
        }
    }

    /// Returns the recorded conversions.
    pub fn calls(&self) -> Vec<MockCodecCall> {
        self.calls.lock().unwrap().clone()
    }

    fn convert(&self, kind: WireKind, tag: u8, canonical: &[u8]) -> Result<Bytes, String> {
        self.calls.lock().unwrap().push(MockCodecCall {
            kind,
            canonical: canonical.to_vec(),
        });
        if let Some(reason) = &self.failure {
            return Err(reason.clone());
        }
        let mut out = BytesMut::with_capacity(canonical.len() + 1);
        out.put_u8(tag);
        out.put_slice(canonical);
        Ok(out.freeze())
    }
}

impl ServiceModelCodec for MockCodec {
    type Error = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn indication_header_to_wire(&self, canonical: &[u8]) -> Result<Bytes, String> {
        self.convert(WireKind::IndicationHeader, HEADER_TAG, canonical)
    }

    fn indication_message_to_wire(&self, canonical: &[u8]) -> Result<Bytes, String> {
        self.convert(WireKind::IndicationMessage, MESSAGE_TAG, canonical)
    }

    fn ran_function_description_to_wire(&self, canonical: &[u8]) -> Result<Bytes, String> {
        self.convert(WireKind::RanFunctionDescription, RAN_FUNCTION_TAG, canonical)
    }
}
