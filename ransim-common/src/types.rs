//! Network identity types shared by the E2 service models: PLMN and S-NSSAI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Public Land Mobile Network identifier.
///
/// - MCC (Mobile Country Code): 3 decimal digits
/// - MNC (Mobile Network Code): 2 or 3 decimal digits, `long_mnc` selects 3
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Plmn {
    /// Mobile Country Code (0-999)
    pub mcc: u16,
    /// Mobile Network Code (0-999)
    pub mnc: u16,
    /// True if MNC is 3 digits
    #[serde(default)]
    pub long_mnc: bool,
}

impl Plmn {
    /// Creates a new PLMN.
    pub const fn new(mcc: u16, mnc: u16, long_mnc: bool) -> Self {
        Self { mcc, mnc, long_mnc }
    }

    /// Encodes the PLMN into the 3-octet BCD form carried in PLMN identity IEs.
    ///
    /// - Octet 0: MCC digit 2 (high nibble) | MCC digit 1 (low nibble)
    /// - Octet 1: MNC digit 3 or 0xF (high nibble) | MCC digit 3 (low nibble)
    /// - Octet 2: MNC digit 2 (high nibble) | MNC digit 1 (low nibble)
    pub fn encode(&self) -> [u8; 3] {
        let mcc = [
            ((self.mcc / 100) % 10) as u8,
            ((self.mcc / 10) % 10) as u8,
            (self.mcc % 10) as u8,
        ];
        let (mnc1, mnc2, mnc3) = if self.long_mnc {
            (
                ((self.mnc / 100) % 10) as u8,
                ((self.mnc / 10) % 10) as u8,
                (self.mnc % 10) as u8,
            )
        } else {
            (((self.mnc / 10) % 10) as u8, (self.mnc % 10) as u8, 0x0F)
        };

        [
            (mcc[1] << 4) | mcc[0],
            (mnc3 << 4) | mcc[2],
            (mnc2 << 4) | mnc1,
        ]
    }

    /// Decodes a PLMN from its 3-octet BCD form.
    pub fn decode(bytes: [u8; 3]) -> Self {
        let mcc = 100 * u16::from(bytes[0] & 0x0F)
            + 10 * u16::from(bytes[0] >> 4)
            + u16::from(bytes[1] & 0x0F);

        let mnc1 = u16::from(bytes[2] & 0x0F);
        let mnc2 = u16::from(bytes[2] >> 4);
        let mnc3 = bytes[1] >> 4;

        if mnc3 == 0x0F {
            Self::new(mcc, 10 * mnc1 + mnc2, false)
        } else {
            Self::new(mcc, 100 * mnc1 + 10 * mnc2 + u16::from(mnc3), true)
        }
    }
}

impl fmt::Debug for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plmn({self})")
    }
}

impl fmt::Display for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.long_mnc {
            write!(f, "{:03}-{:03}", self.mcc, self.mnc)
        } else {
            write!(f, "{:03}-{:02}", self.mcc, self.mnc)
        }
    }
}

/// Single Network Slice Selection Assistance Information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SNssai {
    /// Slice/Service Type
    pub sst: u8,
    /// Slice Differentiator (24 bits)
    pub sd: Option<[u8; 3]>,
}

impl SNssai {
    /// Creates an S-NSSAI with only an SST.
    pub const fn new(sst: u8) -> Self {
        Self { sst, sd: None }
    }

    /// Creates an S-NSSAI with SST and the low 24 bits of `sd`.
    pub const fn with_sd_u32(sst: u8, sd: u32) -> Self {
        Self {
            sst,
            sd: Some([(sd >> 16) as u8, (sd >> 8) as u8, sd as u8]),
        }
    }
}

impl fmt::Display for SNssai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sd {
            Some(sd) => write!(f, "{}-{:02X}{:02X}{:02X}", self.sst, sd[0], sd[1], sd[2]),
            None => write!(f, "{}", self.sst),
        }
    }
}
