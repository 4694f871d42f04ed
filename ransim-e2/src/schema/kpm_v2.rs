//! E2SM-KPM v2 structures

use serde::{Deserialize, Serialize};

use super::common::{CellGlobalId, GlobalKpmNodeId, PlmnIdentity, Snssai};
use super::{check_range, check_size, Validate};
use crate::error::{E2Error, Result};

/// maxnoofMeasurementInfo
pub const MAX_NOOF_MEASUREMENT_INFO: usize = 65535;
/// maxnoofMeasurementRecord
pub const MAX_NOOF_MEASUREMENT_RECORD: usize = 65535;
/// maxnoofMeasurementValue
pub const MAX_NOOF_MEASUREMENT_VALUE: usize = 65535;
/// maxnoofCells
pub const MAX_NOOF_CELLS: usize = 16384;
/// maxnoofRICStyles
pub const MAX_NOOF_RIC_STYLES: usize = 63;
/// maxnoofConditionInfo
pub const MAX_NOOF_CONDITION_INFO: usize = 32768;
/// maxnoofUEID
pub const MAX_NOOF_UEID: usize = 65535;

// ============================================================================
// Indication header
// ============================================================================

/// 4-octet collection start timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeStamp(pub [u8; 4]);

/// Indication header format 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicationHeaderFormat1 {
    /// Collection start time
    pub collet_start_time: TimeStamp,
    /// File format version
    pub file_format_version: Option<String>,
    /// Sender name
    pub sender_name: Option<String>,
    /// Sender type
    pub sender_type: Option<String>,
    /// Vendor name
    pub vendor_name: Option<String>,
    /// Reporting node
    pub kpm_node_id: Option<GlobalKpmNodeId>,
}

/// Indication header format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicationHeaderFormat {
    /// Format 1
    Format1(IndicationHeaderFormat1),
}

/// E2SM-KPM indication header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicationHeader {
    /// Active format
    pub format: IndicationHeaderFormat,
}

impl Validate for IndicationHeader {
    fn validate(&self) -> Result<()> {
        const S: &str = "E2SM-KPM-IndicationHeader";
        let IndicationHeaderFormat::Format1(f1) = &self.format;

        let limits = [
            ("fileFormatversion", &f1.file_format_version, 15),
            ("senderName", &f1.sender_name, 400),
            ("senderType", &f1.sender_type, 8),
            ("vendorName", &f1.vendor_name, 32),
        ];
        for (field, value, max) in limits {
            if let Some(value) = value {
                check_size(S, field, value.len(), 0, max)?;
                if !is_printable(value) {
                    return Err(E2Error::validation(S, format!("{field} is not a PrintableString")));
                }
            }
        }
        f1.kpm_node_id.validate()
    }
}

/// ASN.1 PrintableString alphabet.
fn is_printable(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || " '()+,-./:=?".contains(c))
}

// ============================================================================
// Measurements
// ============================================================================

/// Measurement type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementType {
    /// Measurement name, e.g. "RRC.Conn.Avg"
    Name(String),
    /// Measurement id (1..65536)
    Id(i32),
}

impl Validate for MeasurementType {
    fn validate(&self) -> Result<()> {
        match self {
            MeasurementType::Name(name) => {
                check_size("MeasurementType", "measName", name.len(), 1, 150)
            }
            MeasurementType::Id(id) => {
                check_range("MeasurementType", "measID", i64::from(*id), 1, 65536)
            }
        }
    }
}

/// Start/end indication of a label
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartEndInd {
    Start,
    End,
}

/// Measurement label
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurementLabel {
    /// PLMN identity
    pub plmn_id: Option<PlmnIdentity>,
    /// Slice
    pub slice_id: Option<Snssai>,
    /// 5QI (0..255)
    pub five_qi: Option<i32>,
    /// QoS flow identifier (0..63)
    pub qfi: Option<i32>,
    /// QCI (0..255)
    pub qci: Option<i32>,
    /// Largest QCI
    pub qci_max: Option<i32>,
    /// Smallest QCI
    pub qci_min: Option<i32>,
    /// Largest ARP (1..15)
    pub arp_max: Option<i32>,
    /// Smallest ARP (1..15)
    pub arp_min: Option<i32>,
    /// Bitrate range
    pub bitrate_range: Option<i32>,
    /// Layer MU-MIMO
    pub layer_mu_mimo: Option<i32>,
    /// SUM present as TRUE
    pub sum: bool,
    /// Distribution bin X
    pub dist_bin_x: Option<i32>,
    /// Distribution bin Y
    pub dist_bin_y: Option<i32>,
    /// Distribution bin Z
    pub dist_bin_z: Option<i32>,
    /// preLabelOverride present as TRUE
    pub pre_label_override: bool,
    /// Start/end indication
    pub start_end_ind: Option<StartEndInd>,
}

impl Validate for MeasurementLabel {
    fn validate(&self) -> Result<()> {
        const S: &str = "MeasurementLabel";
        let ranges = [
            ("fiveQI", self.five_qi, 0, 255),
            ("qFI", self.qfi, 0, 63),
            ("qCI", self.qci, 0, 255),
            ("qCImax", self.qci_max, 0, 255),
            ("qCImin", self.qci_min, 0, 255),
            ("aRPmax", self.arp_max, 1, 15),
            ("aRPmin", self.arp_min, 1, 15),
            ("bitrateRange", self.bitrate_range, 1, 65535),
            ("layerMU-MIMO", self.layer_mu_mimo, 1, 65535),
            ("distBinX", self.dist_bin_x, 1, 65535),
            ("distBinY", self.dist_bin_y, 1, 65535),
            ("distBinZ", self.dist_bin_z, 1, 65535),
        ];
        for (field, value, min, max) in ranges {
            if let Some(v) = value {
                check_range(S, field, i64::from(v), min, max)?;
            }
        }
        if let (Some(min), Some(max)) = (self.qci_min, self.qci_max) {
            if min > max {
                return Err(E2Error::validation(S, format!("qCImin {min} above qCImax {max}")));
            }
        }
        if let (Some(min), Some(max)) = (self.arp_min, self.arp_max) {
            if min > max {
                return Err(E2Error::validation(S, format!("aRPmin {min} above aRPmax {max}")));
            }
        }
        self.slice_id.validate()
    }
}

/// Label info item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelInfoItem {
    /// Label
    pub meas_label: MeasurementLabel,
}

impl Validate for LabelInfoItem {
    fn validate(&self) -> Result<()> {
        self.meas_label.validate()
    }
}

/// Measurement info item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementInfoItem {
    /// Measurement type
    pub meas_type: MeasurementType,
    /// Labels the measurement is reported for
    pub label_info_list: Vec<LabelInfoItem>,
}

impl Validate for MeasurementInfoItem {
    fn validate(&self) -> Result<()> {
        self.meas_type.validate()?;
        check_size(
            "MeasurementInfoItem",
            "labelInfoList",
            self.label_info_list.len(),
            1,
            usize::MAX,
        )?;
        self.label_info_list.validate()
    }
}

/// Measurement record item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeasurementRecordItem {
    /// Counter value (0..4294967295)
    Integer(i64),
    /// Real value
    Real(f64),
    /// No value available
    NoValue,
}

impl Validate for MeasurementRecordItem {
    fn validate(&self) -> Result<()> {
        match self {
            MeasurementRecordItem::Integer(v) => {
                check_range("MeasurementRecordItem", "integer", *v, 0, i64::from(u32::MAX))
            }
            MeasurementRecordItem::Real(v) if !v.is_finite() => Err(E2Error::validation(
                "MeasurementRecordItem",
                format!("real value {v} is not finite"),
            )),
            _ => Ok(()),
        }
    }
}

/// Measurement data item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementDataItem {
    /// Records, one per measurement info item
    pub meas_record: Vec<MeasurementRecordItem>,
    /// Set when the records are incomplete
    pub incomplete_flag: bool,
}

impl Validate for MeasurementDataItem {
    fn validate(&self) -> Result<()> {
        check_size(
            "MeasurementDataItem",
            "measRecord",
            self.meas_record.len(),
            1,
            MAX_NOOF_MEASUREMENT_VALUE,
        )?;
        self.meas_record.validate()
    }
}

// ============================================================================
// Message format 2 matching conditions
// ============================================================================

/// Test condition type
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestCondType {
    Gbr,
    Ambr,
    IsStat,
    IsCatM,
    Rsrp,
    Rsrq,
}

/// Test condition expression
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestCondExpression {
    Equal,
    GreaterThan,
    LessThan,
    Contains,
    Present,
}

/// Test condition value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestCondValue {
    /// Integer
    Int(i64),
    /// Enumerated
    Enum(i64),
    /// Boolean
    Bool(bool),
    /// Bit string
    BitS(super::common::BitString),
    /// Octet string
    OctS(Vec<u8>),
    /// Printable string
    PrtS(String),
}

/// Test condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCondInfo {
    /// What is tested
    pub test_type: TestCondType,
    /// Comparison
    pub test_expr: Option<TestCondExpression>,
    /// Operand
    pub test_value: Option<TestCondValue>,
}

/// Matching condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchingCondItem {
    /// Match on a label
    MeasLabel(MeasurementLabel),
    /// Match on a test condition
    TestCondInfo(TestCondInfo),
}

/// Measurement condition and the UEs matching it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementCondUeidItem {
    /// Measurement type
    pub meas_type: MeasurementType,
    /// Conditions
    pub matching_cond: Vec<MatchingCondItem>,
    /// Matching UE identities
    pub matching_ueid_list: Vec<Vec<u8>>,
}

impl Validate for MeasurementCondUeidItem {
    fn validate(&self) -> Result<()> {
        const S: &str = "MeasurementCondUEidItem";
        self.meas_type.validate()?;
        check_size(S, "matchingCond", self.matching_cond.len(), 1, MAX_NOOF_CONDITION_INFO)?;
        check_size(S, "matchingUEidList", self.matching_ueid_list.len(), 0, MAX_NOOF_UEID)?;
        for cond in &self.matching_cond {
            if let MatchingCondItem::MeasLabel(label) = cond {
                label.validate()?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Indication message
// ============================================================================

/// Indication message format 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicationMessageFormat1 {
    /// Subscription id
    pub subscript_id: i64,
    /// Cell object id
    pub cell_obj_id: Option<String>,
    /// Granularity period in ms
    pub granul_period: Option<u32>,
    /// Measurements the records refer to
    pub meas_info_list: Option<Vec<MeasurementInfoItem>>,
    /// Records
    pub meas_data: Vec<MeasurementDataItem>,
}

/// Indication message format 2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicationMessageFormat2 {
    /// Subscription id
    pub subscript_id: i64,
    /// Cell object id
    pub cell_obj_id: Option<String>,
    /// Granularity period in ms
    pub granul_period: Option<u32>,
    /// Conditions the records refer to
    pub meas_cond_ueid_list: Vec<MeasurementCondUeidItem>,
    /// Records
    pub meas_data: Vec<MeasurementDataItem>,
}

/// Indication message format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IndicationMessageFormat {
    /// Format 1
    Format1(IndicationMessageFormat1),
    /// Format 2
    Format2(IndicationMessageFormat2),
}

/// E2SM-KPM indication message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicationMessage {
    /// Active format
    pub format: IndicationMessageFormat,
}

fn validate_message_common(
    subscript_id: i64,
    cell_obj_id: &Option<String>,
    granul_period: Option<u32>,
    meas_data: &[MeasurementDataItem],
) -> Result<()> {
    const S: &str = "E2SM-KPM-IndicationMessage";
    check_range(S, "subscriptID", subscript_id, 1, 1 << 32)?;
    if let Some(id) = cell_obj_id {
        check_size(S, "cellObjID", id.len(), 1, 400)?;
    }
    if granul_period == Some(0) {
        return Err(E2Error::validation(S, "granulPeriod must be at least 1"));
    }
    check_size(S, "measData", meas_data.len(), 1, MAX_NOOF_MEASUREMENT_RECORD)?;
    meas_data.validate()
}

impl Validate for IndicationMessage {
    fn validate(&self) -> Result<()> {
        const S: &str = "E2SM-KPM-IndicationMessage";
        match &self.format {
            IndicationMessageFormat::Format1(f1) => {
                validate_message_common(
                    f1.subscript_id,
                    &f1.cell_obj_id,
                    f1.granul_period,
                    &f1.meas_data,
                )?;
                if let Some(info) = &f1.meas_info_list {
                    check_size(S, "measInfoList", info.len(), 1, MAX_NOOF_MEASUREMENT_INFO)?;
                    info.validate()?;
                    let mismatched = f1
                        .meas_data
                        .iter()
                        .find(|d| d.meas_record.len() != info.len());
                    if let Some(item) = mismatched {
                        return Err(E2Error::validation(
                            S,
                            format!(
                                "measData item carries {} records for {} measurements",
                                item.meas_record.len(),
                                info.len()
                            ),
                        ));
                    }
                }
                Ok(())
            }
            IndicationMessageFormat::Format2(f2) => {
                validate_message_common(
                    f2.subscript_id,
                    &f2.cell_obj_id,
                    f2.granul_period,
                    &f2.meas_data,
                )?;
                check_size(
                    S,
                    "measCondUEidList",
                    f2.meas_cond_ueid_list.len(),
                    1,
                    MAX_NOOF_MEASUREMENT_INFO,
                )?;
                f2.meas_cond_ueid_list.validate()
            }
        }
    }
}

// ============================================================================
// RAN function description
// ============================================================================

/// RAN function name block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RanFunctionName {
    /// Short name
    pub ran_function_short_name: String,
    /// Service model OID
    pub ran_function_e2sm_oid: String,
    /// Description
    pub ran_function_description: String,
    /// Instance
    pub ran_function_instance: Option<i32>,
}

/// Cell measurement object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMeasurementObjectItem {
    /// Cell object id
    pub cell_object_id: String,
    /// Cell global id
    pub cell_global_id: CellGlobalId,
}

impl Validate for CellMeasurementObjectItem {
    fn validate(&self) -> Result<()> {
        check_size(
            "CellMeasurementObjectItem",
            "cell-object-ID",
            self.cell_object_id.len(),
            1,
            400,
        )?;
        self.cell_global_id.validate()
    }
}

/// KPM node item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RicKpmNodeItem {
    /// Node identity
    pub ric_kpm_node_type: GlobalKpmNodeId,
    /// Cells measured on this node
    pub cell_measurement_object_list: Vec<CellMeasurementObjectItem>,
}

impl Validate for RicKpmNodeItem {
    fn validate(&self) -> Result<()> {
        self.ric_kpm_node_type.validate()?;
        check_size(
            "RIC-KPMNode-Item",
            "cell-Measurement-Object-List",
            self.cell_measurement_object_list.len(),
            0,
            MAX_NOOF_CELLS,
        )?;
        self.cell_measurement_object_list.validate()
    }
}

/// Event trigger style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RicEventTriggerStyleItem {
    /// Style type
    pub ric_event_trigger_style_type: i32,
    /// Style name
    pub ric_event_trigger_style_name: String,
    /// Event trigger format
    pub ric_event_trigger_format_type: i32,
}

impl Validate for RicEventTriggerStyleItem {
    fn validate(&self) -> Result<()> {
        check_size(
            "RIC-EventTriggerStyle-Item",
            "ric-EventTriggerStyle-Name",
            self.ric_event_trigger_style_name.len(),
            1,
            150,
        )
    }
}

/// Measurement supported by a report style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementInfoActionItem {
    /// Measurement name
    pub meas_name: String,
    /// Measurement id
    pub meas_id: Option<i32>,
}

impl Validate for MeasurementInfoActionItem {
    fn validate(&self) -> Result<()> {
        MeasurementType::Name(self.meas_name.clone()).validate()?;
        if let Some(id) = self.meas_id {
            MeasurementType::Id(id).validate()?;
        }
        Ok(())
    }
}

/// Report style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RicReportStyleItem {
    /// Style type
    pub ric_report_style_type: i32,
    /// Style name
    pub ric_report_style_name: String,
    /// Action definition format
    pub ric_action_format_type: i32,
    /// Measurements offered
    pub meas_info_action_list: Vec<MeasurementInfoActionItem>,
    /// Indication header format
    pub ric_indication_header_format_type: i32,
    /// Indication message format
    pub ric_indication_message_format_type: i32,
}

impl Validate for RicReportStyleItem {
    fn validate(&self) -> Result<()> {
        const S: &str = "RIC-ReportStyle-Item";
        check_size(S, "ric-ReportStyle-Name", self.ric_report_style_name.len(), 1, 150)?;
        check_size(
            S,
            "measInfo-Action-List",
            self.meas_info_action_list.len(),
            1,
            MAX_NOOF_MEASUREMENT_INFO,
        )?;
        self.meas_info_action_list.validate()
    }
}

/// E2SM-KPM RAN function description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RanFunctionDescription {
    /// Name block
    pub ran_function_name: RanFunctionName,
    /// Nodes
    pub ric_kpm_node_list: Vec<RicKpmNodeItem>,
    /// Event trigger styles
    pub ric_event_trigger_style_list: Vec<RicEventTriggerStyleItem>,
    /// Report styles
    pub ric_report_style_list: Vec<RicReportStyleItem>,
}

impl Validate for RanFunctionDescription {
    fn validate(&self) -> Result<()> {
        const S: &str = "E2SM-KPM-RANfunction-Description";
        let name = &self.ran_function_name;
        check_size(S, "ranFunction-ShortName", name.ran_function_short_name.len(), 1, 150)?;
        check_size(S, "ranFunction-E2SM-OID", name.ran_function_e2sm_oid.len(), 1, 1000)?;
        check_size(S, "ranFunction-Description", name.ran_function_description.len(), 1, 150)?;
        check_size(
            S,
            "ric-EventTriggerStyle-List",
            self.ric_event_trigger_style_list.len(),
            0,
            MAX_NOOF_RIC_STYLES,
        )?;
        check_size(
            S,
            "ric-ReportStyle-List",
            self.ric_report_style_list.len(),
            0,
            MAX_NOOF_RIC_STYLES,
        )?;
        self.ric_kpm_node_list.validate()?;
        self.ric_event_trigger_style_list.validate()?;
        self.ric_report_style_list.validate()
    }
}
