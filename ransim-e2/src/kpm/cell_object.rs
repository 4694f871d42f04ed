//! Cell measurement object

use crate::error::{E2Error, Result};
use crate::schema::common::{CellGlobalId, EutraCgi, Nrcgi, PlmnIdentity};
use crate::schema::kpm_v2::CellMeasurementObjectItem;
use crate::schema::validated;

#[derive(Debug, Clone)]
enum CgiSource {
    Built(CellGlobalId),
    Nr(PlmnIdentity, u64),
    Eutra(PlmnIdentity, u64),
}

impl CgiSource {
    fn into_cgi(self) -> Result<CellGlobalId> {
        match self {
            CgiSource::Built(cgi) => Ok(cgi),
            CgiSource::Nr(plmn, id) => Ok(CellGlobalId::NrCgi(Nrcgi::new(plmn, id)?)),
            CgiSource::Eutra(plmn, id) => Ok(CellGlobalId::EutraCgi(EutraCgi::new(plmn, id)?)),
        }
    }
}

/// Builder for a [`CellMeasurementObjectItem`].
///
/// Cell identity widths are checked by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct CellMeasurementObjectItemBuilder {
    cell_object_id: String,
    cell_global_id: Option<CgiSource>,
}

impl CellMeasurementObjectItemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell object id (1..400 characters).
    pub fn with_cell_object_id(mut self, id: impl Into<String>) -> Self {
        self.cell_object_id = id.into();
        self
    }

    /// Set an already built cell global id.
    pub fn with_cell_global_id(mut self, cgi: CellGlobalId) -> Self {
        self.cell_global_id = Some(CgiSource::Built(cgi));
        self
    }

    /// Set an NR CGI from its PLMN and 36-bit cell identity.
    pub fn with_nr_cgi(mut self, plmn: PlmnIdentity, nr_cell_identity: u64) -> Self {
        self.cell_global_id = Some(CgiSource::Nr(plmn, nr_cell_identity));
        self
    }

    /// Set an E-UTRA CGI from its PLMN and 28-bit cell identity.
    pub fn with_eutra_cgi(mut self, plmn: PlmnIdentity, eutra_cell_identity: u64) -> Self {
        self.cell_global_id = Some(CgiSource::Eutra(plmn, eutra_cell_identity));
        self
    }

    /// Assembles and validates the item.
    pub fn build(self) -> Result<CellMeasurementObjectItem> {
        let cell_global_id = self
            .cell_global_id
            .ok_or_else(|| E2Error::structural("cell_global_id", "not set"))?
            .into_cgi()?;
        validated(CellMeasurementObjectItem {
            cell_object_id: self.cell_object_id,
            cell_global_id,
        })
    }
}
