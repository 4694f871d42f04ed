//! E2SM-RC indication headers
//!
//! Format 1 accompanies REPORT indications. Format 2 accompanies INSERT
//! indications and names the UE the insert concerns.

use bytes::Bytes;

use crate::codec::{to_wire, ServiceModelCodec, WireKind};
use crate::error::{E2Error, Result};
use crate::schema::rc_v1::{
    IndicationHeader, IndicationHeaderFormat, IndicationHeaderFormat1, IndicationHeaderFormat2,
    UeId,
};
use crate::schema::validated;

/// Builder for a format 1 [`IndicationHeader`].
///
/// A zero event trigger condition id means absent.
#[derive(Debug, Clone, Default)]
pub struct IndicationHeaderFormat1Builder {
    event_trigger_condition_id: i32,
}

impl IndicationHeaderFormat1Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event trigger condition id.
    pub fn with_event_trigger_condition_id(mut self, id: i32) -> Self {
        self.event_trigger_condition_id = id;
        self
    }

    /// Assembles and validates the header.
    pub fn build(self) -> Result<IndicationHeader> {
        let ric_event_trigger_condition_id =
            Some(self.event_trigger_condition_id).filter(|&id| id != 0);
        validated(IndicationHeader {
            format: IndicationHeaderFormat::Format1(IndicationHeaderFormat1 {
                ric_event_trigger_condition_id,
            }),
        })
    }

    /// Builds the header and encodes it through `codec`.
    pub fn to_wire_bytes<C: ServiceModelCodec + ?Sized>(self, codec: &C) -> Result<Bytes> {
        let header = self.build()?;
        to_wire(&header, WireKind::IndicationHeader, codec)
    }
}

/// Builder for a format 2 [`IndicationHeader`].
///
/// The UE id is required.
#[derive(Debug, Clone, Default)]
pub struct IndicationHeaderFormat2Builder {
    ue_id: Option<UeId>,
    insert_style_type: i32,
    insert_indication_id: i32,
}

impl IndicationHeaderFormat2Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the UE id.
    pub fn with_ue_id(mut self, ue_id: UeId) -> Self {
        self.ue_id = Some(ue_id);
        self
    }

    /// Set the insert style type.
    pub fn with_insert_style_type(mut self, style_type: i32) -> Self {
        self.insert_style_type = style_type;
        self
    }

    /// Set the insert indication id.
    pub fn with_insert_indication_id(mut self, id: i32) -> Self {
        self.insert_indication_id = id;
        self
    }

    /// Assembles and validates the header.
    pub fn build(self) -> Result<IndicationHeader> {
        let ue_id = self
            .ue_id
            .ok_or_else(|| E2Error::structural("ue_id", "not set"))?;
        validated(IndicationHeader {
            format: IndicationHeaderFormat::Format2(IndicationHeaderFormat2 {
                ue_id,
                ric_insert_style_type: self.insert_style_type,
                ric_insert_indication_id: self.insert_indication_id,
            }),
        })
    }

    /// Builds the header and encodes it through `codec`.
    pub fn to_wire_bytes<C: ServiceModelCodec + ?Sized>(self, codec: &C) -> Result<Bytes> {
        let header = self.build()?;
        to_wire(&header, WireKind::IndicationHeader, codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_canonical;
    use crate::codec::test_support::{TaggingCodec, HEADER_TAG};
    use crate::rc::GnbUeidBuilder;

    fn ue_id() -> UeId {
        GnbUeidBuilder::new()
            .with_amf_ue_ngap_id(1)
            .with_guami_plmn_id(&[0x00, 0xF1, 0x10])
            .build()
            .unwrap()
    }

    #[test]
    fn test_format1_condition_id() {
        let header = IndicationHeaderFormat1Builder::new()
            .with_event_trigger_condition_id(4)
            .build()
            .unwrap();
        let IndicationHeaderFormat::Format1(f1) = header.format else {
            panic!("expected format 1");
        };
        assert_eq!(f1.ric_event_trigger_condition_id, Some(4));
    }

    #[test]
    fn test_format1_zero_means_absent() {
        let header = IndicationHeaderFormat1Builder::new()
            .with_event_trigger_condition_id(4)
            .with_event_trigger_condition_id(0)
            .build()
            .unwrap();
        assert_eq!(
            header.format,
            IndicationHeaderFormat::Format1(IndicationHeaderFormat1::default())
        );
    }

    #[test]
    fn test_format1_range() {
        let result = IndicationHeaderFormat1Builder::new()
            .with_event_trigger_condition_id(65536)
            .build();
        assert!(matches!(result, Err(E2Error::ValidationFailed { .. })));
    }

    #[test]
    fn test_format2_build() {
        let header = IndicationHeaderFormat2Builder::new()
            .with_ue_id(ue_id())
            .with_insert_style_type(3)
            .with_insert_indication_id(1)
            .build()
            .unwrap();
        let IndicationHeaderFormat::Format2(f2) = header.format else {
            panic!("expected format 2");
        };
        assert_eq!(f2.ue_id, ue_id());
        assert_eq!(f2.ric_insert_style_type, 3);
        assert_eq!(f2.ric_insert_indication_id, 1);
    }

    #[test]
    fn test_format2_requires_ue_and_indication_id() {
        assert!(matches!(
            IndicationHeaderFormat2Builder::new().with_insert_indication_id(1).build(),
            Err(E2Error::StructuralInvalid { field: "ue_id", .. })
        ));
        assert!(matches!(
            IndicationHeaderFormat2Builder::new().with_ue_id(ue_id()).build(),
            Err(E2Error::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_format2_to_wire_bytes() {
        let wire = IndicationHeaderFormat2Builder::new()
            .with_ue_id(ue_id())
            .with_insert_indication_id(9)
            .to_wire_bytes(&TaggingCodec)
            .unwrap();
        assert_eq!(wire[0], HEADER_TAG);
        let decoded: IndicationHeader = decode_canonical(&wire[1..]).unwrap();
        assert!(matches!(decoded.format, IndicationHeaderFormat::Format2(_)));
    }
}
