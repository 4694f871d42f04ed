//! E2SM-KPM v1 indication header builder
//!
//! The v1 header tags a report with the node, cell, slice and QoS class it
//! was collected for.

use bytes::Bytes;

use crate::codec::{to_wire, ServiceModelCodec, WireKind};
use crate::error::{E2Error, Result};
use crate::kpm::GlobalKpmNodeIdBuilder;
use crate::schema::common::{Nrcgi, PlmnIdentity, Snssai};
use crate::schema::kpm_v1::{IndicationHeader, IndicationHeaderFormat1};
use crate::schema::validated;

const GNB_ID_LEN: u32 = 22;

/// Builder for a v1 [`IndicationHeader`].
///
/// PLMN, gNB ID and SST are required. The NR CGI defaults to the node PLMN
/// and to the gNB ID value as cell identity.
#[derive(Debug, Clone, Default)]
pub struct IndicationHeaderBuilder {
    plmn_id: Option<Vec<u8>>,
    gnb_id: Option<u64>,
    gnb_cu_up_id: Option<i64>,
    gnb_du_id: Option<i64>,
    nrcgi_plmn_id: Option<Vec<u8>>,
    nr_cell_identity: Option<u64>,
    sst: Option<Vec<u8>>,
    sd: Option<Vec<u8>>,
    five_qi: i32,
    qci: i32,
}

impl IndicationHeaderBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node and report PLMN identity (3 octets).
    pub fn with_plmn_id(mut self, plmn_id: &[u8]) -> Self {
        self.plmn_id = Some(plmn_id.to_vec());
        self
    }

    /// Set the 22-bit gNB ID.
    pub fn with_gnb_id(mut self, gnb_id: u64) -> Self {
        self.gnb_id = Some(gnb_id);
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

    /// Set the PLMN identity of the NR CGI (3 octets).
    pub fn with_nrcgi_plmn_id(mut self, plmn_id: &[u8]) -> Self {
        self.nrcgi_plmn_id = Some(plmn_id.to_vec());
        self
    }

    /// Set the 36-bit NR cell identity.
    pub fn with_nr_cell_identity(mut self, identity: u64) -> Self {
        self.nr_cell_identity = Some(identity);
        self
    }

    /// Set the slice SST (1 octet).
    pub fn with_sst(mut self, sst: &[u8]) -> Self {
        self.sst = Some(sst.to_vec());
        self
    }

    /// Set the slice SD (3 octets).
    pub fn with_sd(mut self, sd: &[u8]) -> Self {
        self.sd = Some(sd.to_vec());
        self
    }

    /// Set the 5QI.
    pub fn with_five_qi(mut self, five_qi: i32) -> Self {
        self.five_qi = five_qi;
        self
    }

    /// Set the QCI.
    pub fn with_qci(mut self, qci: i32) -> Self {
        self.qci = qci;
        self
    }

    /// Assembles and validates the header.
    pub fn build(self) -> Result<IndicationHeader> {
        let plmn_id = self
            .plmn_id
            .ok_or_else(|| E2Error::structural("plmn_id", "not set"))?;
        let gnb_id = self
            .gnb_id
            .ok_or_else(|| E2Error::structural("gnb_id", "not set"))?;
        let sst = self
            .sst
            .ok_or_else(|| E2Error::structural("sst", "not set"))?;

        let mut node = GlobalKpmNodeIdBuilder::new()
            .with_plmn_id(&plmn_id)
            .with_gnb_id(gnb_id, GNB_ID_LEN);
        if let Some(id) = self.gnb_cu_up_id {
            node = node.with_gnb_cu_up_id(id);
        }
        if let Some(id) = self.gnb_du_id {
            node = node.with_gnb_du_id(id);
        }
        let id_global_kpm_node_id = node.build()?;

        let plmn_identity = PlmnIdentity::from_slice(&plmn_id)?;
        let nrcgi_plmn = match self.nrcgi_plmn_id {
            Some(bytes) => PlmnIdentity::from_slice(&bytes)?,
            None => plmn_identity,
        };
        let nr_cgi = Nrcgi::new(nrcgi_plmn, self.nr_cell_identity.unwrap_or(gnb_id))?;

        validated(IndicationHeader::Format1(IndicationHeaderFormat1 {
            id_global_kpm_node_id,
            nr_cgi,
            plmn_identity,
            slice_id: Snssai::from_slices(&sst, self.sd.as_deref())?,
            five_qi: self.five_qi,
            qci: self.qci,
        }))
    }

    /// Builds the header and encodes it through `codec`.
    pub fn to_wire_bytes<C: ServiceModelCodec + ?Sized>(self, codec: &C) -> Result<Bytes> {
        let header = self.build()?;
        to_wire(&header, WireKind::IndicationHeader, codec)
    }
}
