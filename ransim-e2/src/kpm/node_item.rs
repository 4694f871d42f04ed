//! KPM node item

use crate::error::{E2Error, Result};
use crate::schema::common::GlobalKpmNodeId;
use crate::schema::kpm_v2::{CellMeasurementObjectItem, RicKpmNodeItem};
use crate::schema::validated;

/// Builder for a [`RicKpmNodeItem`].
///
/// The cell list keeps insertion order. An empty list is allowed.
#[derive(Debug, Clone, Default)]
pub struct RicKpmNodeItemBuilder {
    node_id: Option<GlobalKpmNodeId>,
    cells: Vec<CellMeasurementObjectItem>,
}

impl RicKpmNodeItemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node identity.
    pub fn with_global_kpm_node_id(mut self, node_id: GlobalKpmNodeId) -> Self {
        self.node_id = Some(node_id);
        self
    }

    /// Replace the cell measurement object list.
    pub fn with_cell_measurement_objects(mut self, cells: Vec<CellMeasurementObjectItem>) -> Self {
        self.cells = cells;
        self
    }

    /// Append one cell measurement object.
    pub fn add_cell_measurement_object(mut self, cell: CellMeasurementObjectItem) -> Self {
        self.cells.push(cell);
        self
    }

    /// Assembles and validates the node item.
    pub fn build(self) -> Result<RicKpmNodeItem> {
        let ric_kpm_node_type = self
            .node_id
            .ok_or_else(|| E2Error::structural("ric_kpm_node_type", "not set"))?;
        validated(RicKpmNodeItem {
            ric_kpm_node_type,
            cell_measurement_object_list: self.cells,
        })
    }
}
