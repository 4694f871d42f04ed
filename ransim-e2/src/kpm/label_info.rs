//! Measurement label

use crate::error::{E2Error, Result};
use crate::schema::common::{PlmnIdentity, Snssai};
use crate::schema::kpm_v2::{MeasurementLabel, StartEndInd};
use crate::schema::validated;

/// Builder for a [`MeasurementLabel`].
///
/// Every field is omitted unless set. The `sum` and `pre_label_override`
/// flags are emitted as TRUE when enabled and omitted otherwise.
#[derive(Debug, Clone, Default)]
pub struct LabelInfoBuilder {
    plmn_id: Option<Vec<u8>>,
    sst: Option<Vec<u8>>,
    sd: Option<Vec<u8>>,
    label: MeasurementLabel,
}

impl LabelInfoBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PLMN identity (3 octets).
    pub fn with_plmn_id(mut self, plmn_id: &[u8]) -> Self {
        self.plmn_id = Some(plmn_id.to_vec());
        self
    }

    /// Set the slice SST (1 octet).
    pub fn with_sst(mut self, sst: &[u8]) -> Self {
        self.sst = Some(sst.to_vec());
        self
    }

    /// Set the slice SD (3 octets). Requires an SST.
    pub fn with_sd(mut self, sd: &[u8]) -> Self {
        self.sd = Some(sd.to_vec());
        self
    }

    /// Set the 5QI.
    pub fn with_five_qi(mut self, five_qi: i32) -> Self {
        self.label.five_qi = Some(five_qi);
        self
    }

    /// Set the QoS flow identifier.
    pub fn with_qfi(mut self, qfi: i32) -> Self {
        self.label.qfi = Some(qfi);
        self
    }

    /// Set the QCI.
    pub fn with_qci(mut self, qci: i32) -> Self {
        self.label.qci = Some(qci);
        self
    }

    /// Set the QCI range.
    pub fn with_qci_range(mut self, min: i32, max: i32) -> Self {
        self.label.qci_min = Some(min);
        self.label.qci_max = Some(max);
        self
    }

    /// Set the ARP range.
    pub fn with_arp_range(mut self, min: i32, max: i32) -> Self {
        self.label.arp_min = Some(min);
        self.label.arp_max = Some(max);
        self
    }

    /// Set the bitrate range.
    pub fn with_bitrate_range(mut self, range: i32) -> Self {
        self.label.bitrate_range = Some(range);
        self
    }

    /// Set the MU-MIMO layer.
    pub fn with_layer_mu_mimo(mut self, layer: i32) -> Self {
        self.label.layer_mu_mimo = Some(layer);
        self
    }

    /// Report the sum over all label values.
    pub fn with_sum(mut self, sum: bool) -> Self {
        self.label.sum = sum;
        self
    }

    /// Set the distribution bins.
    pub fn with_dist_bins(mut self, x: Option<i32>, y: Option<i32>, z: Option<i32>) -> Self {
        self.label.dist_bin_x = x;
        self.label.dist_bin_y = y;
        self.label.dist_bin_z = z;
        self
    }

    /// Override previously reported labels.
    pub fn with_pre_label_override(mut self, value: bool) -> Self {
        self.label.pre_label_override = value;
        self
    }

    /// Set the start/end indication.
    pub fn with_start_end_ind(mut self, ind: StartEndInd) -> Self {
        self.label.start_end_ind = Some(ind);
        self
    }

    /// Assembles and validates the label.
    pub fn build(self) -> Result<MeasurementLabel> {
        let mut label = self.label;
        label.plmn_id = self
            .plmn_id
            .as_deref()
            .map(PlmnIdentity::from_slice)
            .transpose()?;
        label.slice_id = match (self.sst.as_deref(), self.sd.as_deref()) {
            (Some(sst), sd) => Some(Snssai::from_slices(sst, sd)?),
            (None, Some(_)) => return Err(E2Error::structural("sd", "SD given without SST")),
            (None, None) => None,
        };
        validated(label)
    }
}
