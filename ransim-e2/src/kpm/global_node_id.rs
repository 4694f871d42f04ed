//! Global KPM node identity (gNB)

use ransim_common::Plmn;

use crate::error::{E2Error, Result};
use crate::schema::common::{
    BitString, GlobalGnbId, GlobalKpmNodeGnbId, GlobalKpmNodeId, GnbIdChoice, PlmnIdentity,
};
use crate::schema::validated;

/// Builder for a gNB [`GlobalKpmNodeId`].
///
/// PLMN and gNB ID are required. The CU-UP and DU ids are omitted unless set.
#[derive(Debug, Clone, Default)]
pub struct GlobalKpmNodeIdBuilder {
    plmn_id: Option<Vec<u8>>,
    gnb_id: Option<(u64, u32)>,
    gnb_cu_up_id: Option<i64>,
    gnb_du_id: Option<i64>,
}

impl GlobalKpmNodeIdBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encoded PLMN identity (3 octets).
    pub fn with_plmn_id(mut self, plmn_id: &[u8]) -> Self {
        self.plmn_id = Some(plmn_id.to_vec());
        self
    }

    /// Set the PLMN identity from MCC/MNC.
    pub fn with_plmn(self, plmn: Plmn) -> Self {
        self.with_plmn_id(&plmn.encode())
    }

    /// Set the gNB ID as the low `len` bits (22..=32) of `value`.
    pub fn with_gnb_id(mut self, value: u64, len: u32) -> Self {
        self.gnb_id = Some((value, len));
        self
    }

    /// Set the gNB-CU-UP id.
    pub fn with_gnb_cu_up_id(mut self, id: i64) -> Self {
        self.gnb_cu_up_id = Some(id);
        self
    }

    /// Set the gNB-DU id.
    pub fn with_gnb_du_id(mut self, id: i64) -> Self {
        self.gnb_du_id = Some(id);
        self
    }

    /// Assembles and validates the node identity.
    pub fn build(self) -> Result<GlobalKpmNodeId> {
        let plmn_id = self
            .plmn_id
            .ok_or_else(|| E2Error::structural("plmn_id", "not set"))?;
        let plmn_id = PlmnIdentity::from_slice(&plmn_id)?;

        let (value, len) = self
            .gnb_id
            .ok_or_else(|| E2Error::structural("gnb_id", "not set"))?;
        if !(22..=32).contains(&len) {
            return Err(E2Error::structural(
                "gnb_id",
                format!("length {len} outside 22..=32 bits"),
            ));
        }
        let gnb_id = BitString::from_u64("gnb_id", value, len)?;

        validated(GlobalKpmNodeId::Gnb(GlobalKpmNodeGnbId {
            global_gnb_id: GlobalGnbId {
                plmn_id,
                gnb_id: GnbIdChoice::GnbId(gnb_id),
            },
            gnb_cu_up_id: self.gnb_cu_up_id,
            gnb_du_id: self.gnb_du_id,
        }))
    }
}
