//! E2SM-KPM v2 indication header (format 1)

use bytes::Bytes;

use crate::codec::{to_wire, ServiceModelCodec, WireKind};
use crate::error::{E2Error, Result};
use crate::schema::common::GlobalKpmNodeId;
use crate::schema::kpm_v2::{
    IndicationHeader, IndicationHeaderFormat, IndicationHeaderFormat1, TimeStamp,
};
use crate::schema::validated;

/// Builder for a format 1 [`IndicationHeader`].
///
/// The collection start time defaults to zero. Every other field is omitted
/// unless set.
#[derive(Debug, Clone, Default)]
pub struct IndicationHeaderBuilder {
    timestamp: Option<Vec<u8>>,
    file_format_version: Option<String>,
    sender_name: Option<String>,
    sender_type: Option<String>,
    vendor_name: Option<String>,
    kpm_node_id: Option<GlobalKpmNodeId>,
}

impl IndicationHeaderBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collection start time (4 octets, NTP seconds).
    pub fn with_timestamp(mut self, timestamp: &[u8]) -> Self {
        self.timestamp = Some(timestamp.to_vec());
        self
    }

    /// Set the collection start time from NTP seconds.
    pub fn with_timestamp_secs(self, secs: u32) -> Self {
        self.with_timestamp(&secs.to_be_bytes())
    }

    /// Set the file format version.
    pub fn with_file_format_version(mut self, version: impl Into<String>) -> Self {
        self.file_format_version = Some(version.into());
        self
    }

    /// Set the sender name.
    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    /// Set the sender type.
    pub fn with_sender_type(mut self, sender_type: impl Into<String>) -> Self {
        self.sender_type = Some(sender_type.into());
        self
    }

    /// Set the vendor name.
    pub fn with_vendor_name(mut self, name: impl Into<String>) -> Self {
        self.vendor_name = Some(name.into());
        self
    }

    /// Set the reporting node.
    pub fn with_global_kpm_node_id(mut self, node_id: GlobalKpmNodeId) -> Self {
        self.kpm_node_id = Some(node_id);
        self
    }

    /// Assembles and validates the header.
    pub fn build(self) -> Result<IndicationHeader> {
        let collet_start_time = match self.timestamp {
            Some(ts) => <[u8; 4]>::try_from(ts.as_slice()).map(TimeStamp).map_err(|_| {
                E2Error::structural("timestamp", format!("expected 4 octets, got {}", ts.len()))
            })?,
            None => TimeStamp::default(),
        };

        validated(IndicationHeader {
            format: IndicationHeaderFormat::Format1(IndicationHeaderFormat1 {
                collet_start_time,
                file_format_version: self.file_format_version,
                sender_name: self.sender_name,
                sender_type: self.sender_type,
                vendor_name: self.vendor_name,
                kpm_node_id: self.kpm_node_id,
            }),
        })
    }

    /// Builds the header and encodes it through `codec`.
    pub fn to_wire_bytes<C: ServiceModelCodec + ?Sized>(self, codec: &C) -> Result<Bytes> {
        let header = self.build()?;
        to_wire(&header, WireKind::IndicationHeader, codec)
    }
}
