//! Information elements shared by E2AP and the service models

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use ransim_common::{Plmn, SNssai};

use super::{check_range, Validate};
use crate::error::{E2Error, Result};

/// IE criticality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criticality {
    /// Reject the whole message
    Reject,
    /// Ignore the IE
    Ignore,
    /// Ignore the IE and notify the sender
    Notify,
}

/// IE presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    /// May be absent
    Optional,
    /// Present depending on other IEs
    Conditional,
    /// Always present
    Mandatory,
}

/// Protocol IE identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolIeId(pub u16);

/// E2AP procedure code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcedureCode(pub u8);

/// 3-octet PLMN identity in BCD form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlmnIdentity(pub [u8; 3]);

impl PlmnIdentity {
    /// Copies a PLMN identity out of `bytes`, which must be exactly 3 octets.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        <[u8; 3]>::try_from(bytes)
            .map(Self)
            .map_err(|_| {
                E2Error::structural(
                    "plmn_identity",
                    format!("expected 3 octets, got {}", bytes.len()),
                )
            })
    }

    /// Returns the encoded octets.
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

impl From<Plmn> for PlmnIdentity {
    fn from(plmn: Plmn) -> Self {
        Self(plmn.encode())
    }
}

/// ASN.1 BIT STRING. Bits are packed MSB first; unused trailing bits are zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString {
    /// Packed bits
    pub value: Vec<u8>,
    /// Number of significant bits
    pub len: u32,
}

impl BitString {
    /// Packs the low `len` bits of `value`.
    ///
    /// `field` names the IE in the error when `value` does not fit.
    pub fn from_u64(field: &'static str, value: u64, len: u32) -> Result<Self> {
        if len == 0 || len > 64 {
            return Err(E2Error::structural(field, format!("unsupported bit length {len}")));
        }
        if len < 64 && value >> len != 0 {
            return Err(E2Error::structural(
                field,
                format!("value {value:#x} does not fit in {len} bits"),
            ));
        }

        let mut bv: BitVec<u8, Msb0> = BitVec::with_capacity(len as usize);
        for i in (0..len).rev() {
            bv.push((value >> i) & 1 == 1);
        }
        bv.set_uninitialized(false);

        Ok(Self {
            value: bv.into_vec(),
            len,
        })
    }

    /// Returns the significant bits as an integer, or `None` past 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.len > 64 || self.value.len() * 8 < self.len as usize {
            return None;
        }
        let bits = BitSlice::<u8, Msb0>::from_slice(&self.value);
        Some(
            bits.iter()
                .take(self.len as usize)
                .fold(0u64, |acc, bit| (acc << 1) | u64::from(*bit)),
        )
    }

    /// Checks the packing invariant and a width constraint.
    pub(crate) fn check(
        &self,
        structure: &'static str,
        field: &str,
        min: u32,
        max: u32,
    ) -> Result<()> {
        if self.len < min || self.len > max {
            return Err(E2Error::validation(
                structure,
                format!("{field} is {} bits, expected {min}..={max}", self.len),
            ));
        }
        let octets = (self.len as usize).div_ceil(8);
        if self.value.len() != octets {
            return Err(E2Error::validation(
                structure,
                format!("{field} carries {} octets for {} bits", self.value.len(), self.len),
            ));
        }
        let bits = BitSlice::<u8, Msb0>::from_slice(&self.value);
        if bits[self.len as usize..].any() {
            return Err(E2Error::validation(
                structure,
                format!("{field} has non-zero padding bits"),
            ));
        }
        Ok(())
    }
}

/// NR cell global identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nrcgi {
    /// PLMN identity
    pub plmn_identity: PlmnIdentity,
    /// NR cell identity (36 bits)
    pub nr_cell_identity: BitString,
}

impl Nrcgi {
    /// Builds an NR CGI from a 36-bit cell identity.
    pub fn new(plmn_identity: PlmnIdentity, nr_cell_identity: u64) -> Result<Self> {
        Ok(Self {
            plmn_identity,
            nr_cell_identity: BitString::from_u64("nr_cell_identity", nr_cell_identity, 36)?,
        })
    }
}

impl Validate for Nrcgi {
    fn validate(&self) -> Result<()> {
        self.nr_cell_identity.check("NRCGI", "nRCellIdentity", 36, 36)
    }
}

/// E-UTRA cell global identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EutraCgi {
    /// PLMN identity
    pub plmn_identity: PlmnIdentity,
    /// E-UTRA cell identity (28 bits)
    pub eutra_cell_identity: BitString,
}

impl EutraCgi {
    /// Builds an E-UTRA CGI from a 28-bit cell identity.
    pub fn new(plmn_identity: PlmnIdentity, eutra_cell_identity: u64) -> Result<Self> {
        Ok(Self {
            plmn_identity,
            eutra_cell_identity: BitString::from_u64(
                "eutra_cell_identity",
                eutra_cell_identity,
                28,
            )?,
        })
    }
}

impl Validate for EutraCgi {
    fn validate(&self) -> Result<()> {
        self.eutra_cell_identity.check("EUTRACGI", "eUTRACellIdentity", 28, 28)
    }
}

/// Cell global identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellGlobalId {
    /// NR cell
    NrCgi(Nrcgi),
    /// E-UTRA cell
    EutraCgi(EutraCgi),
}

impl Validate for CellGlobalId {
    fn validate(&self) -> Result<()> {
        match self {
            CellGlobalId::NrCgi(cgi) => cgi.validate(),
            CellGlobalId::EutraCgi(cgi) => cgi.validate(),
        }
    }
}

/// S-NSSAI as carried in service model IEs: SST is 1 octet, SD 3 octets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snssai {
    /// Slice/Service Type
    pub sst: Vec<u8>,
    /// Slice Differentiator
    pub sd: Option<Vec<u8>>,
}

impl Snssai {
    /// Copies SST and optional SD, checking their widths.
    pub fn from_slices(sst: &[u8], sd: Option<&[u8]>) -> Result<Self> {
        if sst.len() != 1 {
            return Err(E2Error::structural("sst", format!("expected 1 octet, got {}", sst.len())));
        }
        if let Some(sd) = sd {
            if sd.len() != 3 {
                return Err(E2Error::structural(
                    "sd",
                    format!("expected 3 octets, got {}", sd.len()),
                ));
            }
        }
        Ok(Self {
            sst: sst.to_vec(),
            sd: sd.map(<[u8]>::to_vec),
        })
    }
}

impl From<SNssai> for Snssai {
    fn from(slice: SNssai) -> Self {
        Self {
            sst: vec![slice.sst],
            sd: slice.sd.map(|sd| sd.to_vec()),
        }
    }
}

impl Validate for Snssai {
    fn validate(&self) -> Result<()> {
        if self.sst.len() != 1 {
            return Err(E2Error::validation("SNSSAI", "sST must be 1 octet"));
        }
        if self.sd.as_ref().is_some_and(|sd| sd.len() != 3) {
            return Err(E2Error::validation("SNSSAI", "sD must be 3 octets"));
        }
        Ok(())
    }
}

// ============================================================================
// Global KPM node identity
// ============================================================================

/// Largest gNB-CU-UP-ID / gNB-DU-ID (36 bits).
pub const MAX_GNB_CU_UP_ID: i64 = (1 << 36) - 1;

/// gNB identity choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GnbIdChoice {
    /// gNB ID, 22 to 32 bits
    GnbId(BitString),
}

/// Global gNB identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalGnbId {
    /// PLMN identity
    pub plmn_id: PlmnIdentity,
    /// gNB identity
    pub gnb_id: GnbIdChoice,
}

/// gNB node identity used by KPM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalKpmNodeGnbId {
    /// Global gNB identity
    pub global_gnb_id: GlobalGnbId,
    /// gNB-CU-UP identifier
    pub gnb_cu_up_id: Option<i64>,
    /// gNB-DU identifier
    pub gnb_du_id: Option<i64>,
}

/// Global KPM node identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlobalKpmNodeId {
    /// gNB
    Gnb(GlobalKpmNodeGnbId),
}

impl Validate for GlobalKpmNodeId {
    fn validate(&self) -> Result<()> {
        match self {
            GlobalKpmNodeId::Gnb(gnb) => {
                let GnbIdChoice::GnbId(bits) = &gnb.global_gnb_id.gnb_id;
                bits.check("GlobalKPMnode-gNB-ID", "gNB-ID", 22, 32)?;
                if let Some(id) = gnb.gnb_cu_up_id {
                    check_range("GlobalKPMnode-gNB-ID", "gNB-CU-UP-ID", id, 0, MAX_GNB_CU_UP_ID)?;
                }
                if let Some(id) = gnb.gnb_du_id {
                    check_range("GlobalKPMnode-gNB-ID", "gNB-DU-ID", id, 0, MAX_GNB_CU_UP_ID)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_string_packing() {
        let bs = BitString::from_u64("gnb_id", 0x9bcd4, 22).unwrap();
        assert_eq!(bs.len, 22);
        assert_eq!(bs.value.len(), 3);
        // 0x9bcd4 in 22 bits, left aligned: 0010 0110 1111 0011 0101 00xx
        assert_eq!(bs.value, vec![0x26, 0xF3, 0x50]);
        assert_eq!(bs.to_u64(), Some(0x9bcd4));
        assert!(bs.check("t", "gnb_id", 22, 32).is_ok());
    }

    #[test]
    fn test_bit_string_too_wide() {
        let result = BitString::from_u64("amf_pointer", 0x40, 6);
        assert!(matches!(
            result,
            Err(E2Error::StructuralInvalid { field: "amf_pointer", .. })
        ));
    }

    #[test]
    fn test_bit_string_padding_checked() {
        let bs = BitString {
            value: vec![0xFF],
            len: 6,
        };
        assert!(matches!(
            bs.check("t", "f", 6, 6),
            Err(E2Error::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_plmn_identity_from_slice() {
        assert_eq!(
            PlmnIdentity::from_slice(&[0x00, 0xF1, 0x10]).unwrap(),
            PlmnIdentity::from(Plmn::new(1, 1, false))
        );
        assert!(matches!(
            PlmnIdentity::from_slice(&[0x00, 0xF1]),
            Err(E2Error::StructuralInvalid { field: "plmn_identity", .. })
        ));
    }

    #[test]
    fn test_snssai_widths() {
        assert!(Snssai::from_slices(&[1], Some(&[0, 0, 1])).is_ok());
        assert!(Snssai::from_slices(&[1, 2], None).is_err());
        assert!(Snssai::from_slices(&[1], Some(&[0, 1])).is_err());
        let converted = Snssai::from(SNssai::with_sd_u32(1, 0x000102));
        assert_eq!(converted.sd, Some(vec![0x00, 0x01, 0x02]));
    }

    #[test]
    fn test_nrcgi_width() {
        let plmn = PlmnIdentity([0x00, 0xF1, 0x10]);
        assert!(Nrcgi::new(plmn, 0xabcdef012).unwrap().validate().is_ok());
        assert!(Nrcgi::new(plmn, 1 << 36).is_err());
    }
}
