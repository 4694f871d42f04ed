//! E2SM-KPM v1 indication header, kept for slice/QoS tagged reports

use serde::{Deserialize, Serialize};

use super::common::{GlobalKpmNodeId, Nrcgi, PlmnIdentity, Snssai};
use super::{check_range, Validate};
use crate::error::Result;

/// Indication header format 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicationHeaderFormat1 {
    /// Reporting node
    pub id_global_kpm_node_id: GlobalKpmNodeId,
    /// Reported cell
    pub nr_cgi: Nrcgi,
    /// PLMN the report applies to
    pub plmn_identity: PlmnIdentity,
    /// Slice the report applies to
    pub slice_id: Snssai,
    /// 5QI (0..255)
    pub five_qi: i32,
    /// QCI (0..255)
    pub qci: i32,
}

/// E2SM-KPM v1 indication header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicationHeader {
    /// Format 1
    Format1(IndicationHeaderFormat1),
}

impl Validate for IndicationHeader {
    fn validate(&self) -> Result<()> {
        const S: &str = "E2SM-KPMv1-IndicationHeader";
        let IndicationHeader::Format1(f1) = self;
        f1.id_global_kpm_node_id.validate()?;
        f1.nr_cgi.validate()?;
        f1.slice_id.validate()?;
        check_range(S, "fiveQI", i64::from(f1.five_qi), 0, 255)?;
        check_range(S, "qci", i64::from(f1.qci), 0, 255)
    }
}
