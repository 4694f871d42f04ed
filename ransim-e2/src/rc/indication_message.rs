//! E2SM-RC indication message format 5

use bytes::Bytes;

use crate::codec::{to_wire, ServiceModelCodec, WireKind};
use crate::error::Result;
use crate::schema::rc_v1::{
    IndicationMessage, IndicationMessageFormat, IndicationMessageFormat5,
    IndicationMessageFormat5Item, RanParameterValue, RanParameterValueType,
};
use crate::schema::validated;

/// Builder for a format 5 [`IndicationMessage`].
///
/// Reports the values of requested RAN parameters. At least one parameter
/// must be present and the list keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct IndicationMessageFormat5Builder {
    items: Vec<IndicationMessageFormat5Item>,
}

impl IndicationMessageFormat5Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the requested parameter list.
    pub fn with_items(mut self, items: &[IndicationMessageFormat5Item]) -> Self {
        self.items = items.to_vec();
        self
    }

    /// Append a parameter whose key flag is TRUE.
    pub fn add_key_parameter(mut self, id: i64, value: RanParameterValue) -> Self {
        self.items.push(IndicationMessageFormat5Item {
            ran_parameter_id: id,
            ran_parameter_value_type: RanParameterValueType::ElementTrue(value),
        });
        self
    }

    /// Append a parameter whose key flag is FALSE.
    pub fn add_parameter(mut self, id: i64, value: Option<RanParameterValue>) -> Self {
        self.items.push(IndicationMessageFormat5Item {
            ran_parameter_id: id,
            ran_parameter_value_type: RanParameterValueType::ElementFalse(value),
        });
        self
    }

    /// Assembles and validates the message.
    pub fn build(self) -> Result<IndicationMessage> {
        validated(IndicationMessage {
            format: IndicationMessageFormat::Format5(IndicationMessageFormat5 {
                ran_p_requested_list: self.items,
            }),
        })
    }

    /// Builds the message and encodes it through `codec`.
    pub fn to_wire_bytes<C: ServiceModelCodec + ?Sized>(self, codec: &C) -> Result<Bytes> {
        let message = self.build()?;
        to_wire(&message, WireKind::IndicationMessage, codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::test_support::{FailingCodec, TaggingCodec, MESSAGE_TAG};
    use crate::error::{E2Error, EncodingError};
    use crate::schema::common::BitString;

    #[test]
    fn test_build_format5() {
        let msg = IndicationMessageFormat5Builder::new()
            .add_key_parameter(1, RanParameterValue::Integer(30))
            .add_parameter(2, Some(RanParameterValue::PrintableString("cell-1".into())))
            .add_parameter(3, None)
            .build()
            .unwrap();
        let IndicationMessageFormat::Format5(f5) = msg.format;
        let ids: Vec<_> = f5.ran_p_requested_list.iter().map(|i| i.ran_parameter_id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(
            f5.ran_p_requested_list[2].ran_parameter_value_type,
            RanParameterValueType::ElementFalse(None)
        );
    }

    #[test]
    fn test_empty_list_fails_validation() {
        assert!(matches!(
            IndicationMessageFormat5Builder::new().build(),
            Err(E2Error::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_parameter_constraints() {
        assert!(IndicationMessageFormat5Builder::new()
            .add_parameter(0, None)
            .build()
            .is_err());
        assert!(IndicationMessageFormat5Builder::new()
            .add_key_parameter(1, RanParameterValue::Real(f64::NAN))
            .build()
            .is_err());
        let padded = BitString {
            value: vec![0xFF],
            len: 4,
        };
        assert!(IndicationMessageFormat5Builder::new()
            .add_key_parameter(1, RanParameterValue::BitString(padded))
            .build()
            .is_err());
    }

    #[test]
    fn test_with_items_copies() {
        let items = vec![IndicationMessageFormat5Item {
            ran_parameter_id: 5,
            ran_parameter_value_type: RanParameterValueType::ElementTrue(
                RanParameterValue::Boolean(true),
            ),
        }];
        let msg = IndicationMessageFormat5Builder::new()
            .with_items(&items)
            .build()
            .unwrap();
        let IndicationMessageFormat::Format5(f5) = msg.format;
        assert_eq!(f5.ran_p_requested_list, items);
    }

    #[test]
    fn test_to_wire_bytes() {
        let builder = IndicationMessageFormat5Builder::new()
            .add_key_parameter(1, RanParameterValue::OctetString(vec![1, 2]));
        let wire = builder.clone().to_wire_bytes(&TaggingCodec).unwrap();
        assert_eq!(wire[0], MESSAGE_TAG);
        assert!(matches!(
            builder.to_wire_bytes(&FailingCodec),
            Err(E2Error::EncodingFailed(EncodingError::ServiceModel { .. }))
        ));
    }
}
