//! gNB UE identity

use crate::error::{E2Error, Result};
use crate::schema::common::{BitString, PlmnIdentity};
use crate::schema::rc_v1::{GnbUeid, Guami, UeId};
use crate::schema::validated;

/// Builder for a gNB [`UeId`].
///
/// The GUAMI PLMN is required. AMF region, set and pointer default to zero.
#[derive(Debug, Clone, Default)]
pub struct GnbUeidBuilder {
    amf_ue_ngap_id: u64,
    guami_plmn_id: Option<Vec<u8>>,
    amf_region_id: u8,
    amf_set_id: u16,
    amf_pointer: u8,
    f1ap_ids: Vec<u32>,
    ran_ue_id: Option<Vec<u8>>,
}

impl GnbUeidBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AMF UE NGAP ID (40 bits).
    pub fn with_amf_ue_ngap_id(mut self, id: u64) -> Self {
        self.amf_ue_ngap_id = id;
        self
    }

    /// Set the GUAMI PLMN identity (3 octets).
    pub fn with_guami_plmn_id(mut self, plmn_id: &[u8]) -> Self {
        self.guami_plmn_id = Some(plmn_id.to_vec());
        self
    }

    /// Set the AMF region id.
    pub fn with_amf_region_id(mut self, id: u8) -> Self {
        self.amf_region_id = id;
        self
    }

    /// Set the 10-bit AMF set id.
    pub fn with_amf_set_id(mut self, id: u16) -> Self {
        self.amf_set_id = id;
        self
    }

    /// Set the 6-bit AMF pointer.
    pub fn with_amf_pointer(mut self, pointer: u8) -> Self {
        self.amf_pointer = pointer;
        self
    }

    /// Append a gNB-CU UE F1AP ID.
    pub fn add_gnb_cu_ue_f1ap_id(mut self, id: u32) -> Self {
        self.f1ap_ids.push(id);
        self
    }

    /// Set the RAN UE ID (8 octets).
    pub fn with_ran_ue_id(mut self, id: &[u8]) -> Self {
        self.ran_ue_id = Some(id.to_vec());
        self
    }

    /// Assembles and validates the UE identity.
    pub fn build(self) -> Result<UeId> {
        let plmn_id = self
            .guami_plmn_id
            .ok_or_else(|| E2Error::structural("guami_plmn_id", "not set"))?;
        if let Some(id) = &self.ran_ue_id {
            if id.len() != 8 {
                return Err(E2Error::structural(
                    "ran_ue_id",
                    format!("expected 8 octets, got {}", id.len()),
                ));
            }
        }

        let guami = Guami {
            plmn_identity: PlmnIdentity::from_slice(&plmn_id)?,
            amf_region_id: BitString::from_u64("amf_region_id", u64::from(self.amf_region_id), 8)?,
            amf_set_id: BitString::from_u64("amf_set_id", u64::from(self.amf_set_id), 10)?,
            amf_pointer: BitString::from_u64("amf_pointer", u64::from(self.amf_pointer), 6)?,
        };

        validated(UeId::GnbUeid(GnbUeid {
            amf_ue_ngap_id: self.amf_ue_ngap_id,
            guami,
            gnb_cu_ue_f1ap_id_list: self.f1ap_ids,
            ran_ue_id: self.ran_ue_id,
        }))
    }
}
