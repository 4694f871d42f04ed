//! E2SM-RC v1 structures

use serde::{Deserialize, Serialize};

use super::common::{BitString, PlmnIdentity};
use super::{check_range, check_size, Validate};
use crate::error::{E2Error, Result};

/// Largest AMF-UE-NGAP-ID (40 bits)
pub const MAX_AMF_UE_NGAP_ID: u64 = (1 << 40) - 1;
/// maxnoofAssociatedRANParameters
pub const MAX_NOOF_ASSOCIATED_RAN_PARAMETERS: usize = 65535;
/// maxF1APid
pub const MAX_F1AP_ID: usize = 4;

/// GUAMI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guami {
    /// PLMN identity
    pub plmn_identity: PlmnIdentity,
    /// AMF region id (8 bits)
    pub amf_region_id: BitString,
    /// AMF set id (10 bits)
    pub amf_set_id: BitString,
    /// AMF pointer (6 bits)
    pub amf_pointer: BitString,
}

impl Validate for Guami {
    fn validate(&self) -> Result<()> {
        self.amf_region_id.check("GUAMI", "aMFRegionID", 8, 8)?;
        self.amf_set_id.check("GUAMI", "aMFSetID", 10, 10)?;
        self.amf_pointer.check("GUAMI", "aMFPointer", 6, 6)
    }
}

/// UE identity on the NG interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnbUeid {
    /// AMF UE NGAP ID
    pub amf_ue_ngap_id: u64,
    /// GUAMI of the serving AMF
    pub guami: Guami,
    /// gNB-CU UE F1AP IDs
    pub gnb_cu_ue_f1ap_id_list: Vec<u32>,
    /// RAN UE ID (8 octets)
    pub ran_ue_id: Option<Vec<u8>>,
}

/// UE identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UeId {
    /// gNB UE identity
    GnbUeid(GnbUeid),
}

impl Validate for UeId {
    fn validate(&self) -> Result<()> {
        const S: &str = "UEID-GNB";
        let UeId::GnbUeid(ue) = self;
        if ue.amf_ue_ngap_id > MAX_AMF_UE_NGAP_ID {
            return Err(E2Error::validation(
                S,
                format!("amf-UE-NGAP-ID {} exceeds 40 bits", ue.amf_ue_ngap_id),
            ));
        }
        ue.guami.validate()?;
        check_size(S, "gNB-CU-UE-F1AP-ID-List", ue.gnb_cu_ue_f1ap_id_list.len(), 0, MAX_F1AP_ID)?;
        if let Some(ran_ue_id) = &ue.ran_ue_id {
            check_size(S, "ran-UEID", ran_ue_id.len(), 8, 8)?;
        }
        Ok(())
    }
}

// ============================================================================
// Indication header
// ============================================================================

/// Indication header format 1
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndicationHeaderFormat1 {
    /// Event trigger condition id (1..65535)
    pub ric_event_trigger_condition_id: Option<i32>,
}

/// Indication header format 2
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicationHeaderFormat2 {
    /// UE the insert indication concerns
    pub ue_id: UeId,
    /// Insert style type
    pub ric_insert_style_type: i32,
    /// Insert indication id (1..65535)
    pub ric_insert_indication_id: i32,
}

/// Indication header format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicationHeaderFormat {
    /// Format 1
    Format1(IndicationHeaderFormat1),
    /// Format 2
    Format2(IndicationHeaderFormat2),
}

/// E2SM-RC indication header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicationHeader {
    /// Active format
    pub format: IndicationHeaderFormat,
}

impl Validate for IndicationHeader {
    fn validate(&self) -> Result<()> {
        const S: &str = "E2SM-RC-IndicationHeader";
        match &self.format {
            IndicationHeaderFormat::Format1(f1) => match f1.ric_event_trigger_condition_id {
                Some(id) => check_range(S, "ric-eventTriggerCondition-ID", i64::from(id), 1, 65535),
                None => Ok(()),
            },
            IndicationHeaderFormat::Format2(f2) => {
                f2.ue_id.validate()?;
                check_range(
                    S,
                    "ric-InsertIndication-ID",
                    i64::from(f2.ric_insert_indication_id),
                    1,
                    65535,
                )
            }
        }
    }
}

// ============================================================================
// Indication message
// ============================================================================

/// RAN parameter element value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RanParameterValue {
    /// Boolean
    Boolean(bool),
    /// Integer
    Integer(i64),
    /// Real
    Real(f64),
    /// Bit string
    BitString(BitString),
    /// Octet string
    OctetString(Vec<u8>),
    /// Printable string
    PrintableString(String),
}

/// RAN parameter value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RanParameterValueType {
    /// Element whose key flag is TRUE, value mandatory
    ElementTrue(RanParameterValue),
    /// Element whose key flag is FALSE, value optional
    ElementFalse(Option<RanParameterValue>),
}

/// Requested RAN parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicationMessageFormat5Item {
    /// RAN parameter id (1..4294967295)
    pub ran_parameter_id: i64,
    /// Parameter value
    pub ran_parameter_value_type: RanParameterValueType,
}

/// Indication message format 5
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicationMessageFormat5 {
    /// Requested parameters
    pub ran_p_requested_list: Vec<IndicationMessageFormat5Item>,
}

/// Indication message format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IndicationMessageFormat {
    /// Format 5
    Format5(IndicationMessageFormat5),
}

/// E2SM-RC indication message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicationMessage {
    /// Active format
    pub format: IndicationMessageFormat,
}

impl Validate for IndicationMessage {
    fn validate(&self) -> Result<()> {
        const S: &str = "E2SM-RC-IndicationMessage";
        let IndicationMessageFormat::Format5(f5) = &self.format;
        check_size(
            S,
            "ranP-Requested-List",
            f5.ran_p_requested_list.len(),
            1,
            MAX_NOOF_ASSOCIATED_RAN_PARAMETERS,
        )?;
        for item in &f5.ran_p_requested_list {
            check_range(S, "ranParameter-ID", item.ran_parameter_id, 1, i64::from(u32::MAX))?;
            let value = match &item.ran_parameter_value_type {
                RanParameterValueType::ElementTrue(v) => Some(v),
                RanParameterValueType::ElementFalse(v) => v.as_ref(),
            };
            match value {
                Some(RanParameterValue::Real(r)) if !r.is_finite() => {
                    return Err(E2Error::validation(
                        S,
                        format!(
                            "ranParameter {} real value is not finite",
                            item.ran_parameter_id
                        ),
                    ));
                }
                Some(RanParameterValue::BitString(bits)) => {
                    bits.check(S, "valueBitS", 1, u32::MAX)?
                }
                _ => {}
            }
        }
        Ok(())
    }
}
