//! Test fixtures shared by the scenario tests

use ransim_common::Plmn;
use ransim_e2::kpm::{CellMeasurementObjectItemBuilder, GlobalKpmNodeIdBuilder};
use ransim_e2::schema::common::{GlobalKpmNodeId, PlmnIdentity};
use ransim_e2::schema::kpm_v2::CellMeasurementObjectItem;

/// Test PLMN (MCC 001, MNC 01)
pub const TEST_PLMN: Plmn = Plmn::new(1, 1, false);

/// Test gNB ID (22 bits)
pub const TEST_GNB_ID: u64 = 0x9bcd4;

/// Encoded test PLMN
pub fn test_plmn_id() -> PlmnIdentity {
    PlmnIdentity::from(TEST_PLMN)
}

/// gNB node identity in the test PLMN
pub fn test_node_id() -> GlobalKpmNodeId {
    GlobalKpmNodeIdBuilder::new()
        .with_plmn(TEST_PLMN)
        .with_gnb_id(TEST_GNB_ID, 22)
        .with_gnb_cu_up_id(12345)
        .with_gnb_du_id(6789)
        .build()
        .expect("valid test node id")
}

/// NR cell measurement object in the test PLMN
pub fn test_cell(name: &str, nr_cell_identity: u64) -> CellMeasurementObjectItem {
    CellMeasurementObjectItemBuilder::new()
        .with_cell_object_id(name)
        .with_nr_cgi(test_plmn_id(), nr_cell_identity)
        .build()
        .expect("valid test cell")
}
