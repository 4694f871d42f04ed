//! KPM RAN function advertised by the simulator

use bytes::Bytes;

use ransim_common::{E2ToolkitConfig, Plmn};

use crate::codec::{to_wire, ServiceModelCodec, WireKind};
use crate::error::Result;
use crate::kpm::{
    CellMeasurementObjectItemBuilder, GlobalKpmNodeIdBuilder, RanFunctionDescriptionBuilder,
    RicEventTriggerStyleItemBuilder, RicKpmNodeItemBuilder, RicReportStyleItemBuilder,
};
use crate::schema::common::PlmnIdentity;
use crate::schema::kpm_v2::RanFunctionDescription;

const GNB_ID: u64 = 0x9bcd4;
const GNB_ID_LEN: u32 = 22;
const NR_CELL_IDENTITY: u64 = 0xabcdef012;
const CELL_OBJECT_ID: &str = "ONF";
const GNB_CU_UP_ID: i64 = 12345;
const GNB_DU_ID: i64 = 6789;

const RIC_STYLE_TYPE: i32 = 1;
const RIC_STYLE_NAME: &str = "Periodic Report";
const RIC_FORMAT_TYPE: i32 = 5;
const RIC_IND_HDR_FORMAT: i32 = 1;
const RIC_IND_MSG_FORMAT: i32 = 1;

/// Measurements offered by the periodic report style, with their ids.
pub const KPM_MEASUREMENTS: [(&str, i32); 8] = [
    ("RRC.ConnEstabAtt.Tot", 1),
    ("RRC.ConnEstabSucc.Tot", 2),
    ("RRC.ConnReEstabAtt.Tot", 3),
    ("RRC.ConnReEstabAtt.reconfigFail", 4),
    ("RRC.ConnReEstabAtt.HOFail", 5),
    ("RRC.ConnReEstabAtt.Other", 6),
    ("RRC.Conn.Avg", 7),
    ("RRC.Conn.Max", 8),
];

/// Builds the KPM RAN function description for a node in `plmn`.
///
/// The name block comes from `config.kpm`.
pub fn default_ran_function_description(
    config: &E2ToolkitConfig,
    plmn: Plmn,
) -> Result<RanFunctionDescription> {
    let plmn_id = PlmnIdentity::from(plmn);

    let node_id = GlobalKpmNodeIdBuilder::new()
        .with_plmn(plmn)
        .with_gnb_id(GNB_ID, GNB_ID_LEN)
        .with_gnb_cu_up_id(GNB_CU_UP_ID)
        .with_gnb_du_id(GNB_DU_ID)
        .build()?;

    let cell = CellMeasurementObjectItemBuilder::new()
        .with_cell_object_id(CELL_OBJECT_ID)
        .with_nr_cgi(plmn_id, NR_CELL_IDENTITY)
        .build()?;

    let node = RicKpmNodeItemBuilder::new()
        .with_global_kpm_node_id(node_id)
        .add_cell_measurement_object(cell)
        .build()?;

    let event_trigger = RicEventTriggerStyleItemBuilder::new()
        .with_style_type(RIC_STYLE_TYPE)
        .with_style_name(RIC_STYLE_NAME)
        .with_format_type(RIC_FORMAT_TYPE)
        .build()?;

    let report = KPM_MEASUREMENTS
        .iter()
        .fold(RicReportStyleItemBuilder::new(), |b, &(name, id)| {
            b.add_measurement(name, Some(id))
        })
        .with_style_type(RIC_STYLE_TYPE)
        .with_style_name(RIC_STYLE_NAME)
        .with_action_format_type(RIC_FORMAT_TYPE)
        .with_indication_header_format_type(RIC_IND_HDR_FORMAT)
        .with_indication_message_format_type(RIC_IND_MSG_FORMAT)
        .build()?;

    RanFunctionDescriptionBuilder::from_config(&config.kpm)
        .add_kpm_node(node)
        .add_event_trigger_style(event_trigger)
        .add_report_style(report)
        .build()
}

/// Builds the default KPM RAN function description and encodes it.
pub fn ran_function_description_bytes<C: ServiceModelCodec + ?Sized>(
    config: &E2ToolkitConfig,
    plmn: Plmn,
    codec: &C,
) -> Result<Bytes> {
    let description = default_ran_function_description(config, plmn).inspect_err(|e| {
        tracing::error!(error = %e, "failed to build KPM RAN function description");
    })?;
    to_wire(&description, WireKind::RanFunctionDescription, codec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::test_support::{TaggingCodec, RAN_FUNCTION_TAG};
    use crate::schema::common::{CellGlobalId, GlobalKpmNodeId, GnbIdChoice};

    const PLMN: Plmn = Plmn::new(1, 1, false);

    #[test]
    fn test_default_description_shape() {
        let rfd = default_ran_function_description(&E2ToolkitConfig::default(), PLMN).unwrap();

        assert_eq!(rfd.ran_function_name.ran_function_short_name, "ORAN-E2SM-KPM");
        assert_eq!(rfd.ran_function_name.ran_function_instance, Some(1));
        assert_eq!(rfd.ric_kpm_node_list.len(), 1);
        assert_eq!(rfd.ric_event_trigger_style_list.len(), 1);
        assert_eq!(rfd.ric_report_style_list.len(), 1);

        let node = &rfd.ric_kpm_node_list[0];
        let GlobalKpmNodeId::Gnb(gnb) = &node.ric_kpm_node_type;
        let GnbIdChoice::GnbId(bits) = &gnb.global_gnb_id.gnb_id;
        assert_eq!((bits.to_u64(), bits.len), (Some(GNB_ID), 22));
        assert_eq!(gnb.gnb_cu_up_id, Some(12345));
        assert_eq!(gnb.gnb_du_id, Some(6789));

        let cell = &node.cell_measurement_object_list[0];
        assert_eq!(cell.cell_object_id, "ONF");
        let CellGlobalId::NrCgi(cgi) = &cell.cell_global_id else {
            panic!("expected NR CGI");
        };
        assert_eq!(cgi.plmn_identity, PlmnIdentity::from(PLMN));
        assert_eq!(cgi.nr_cell_identity.to_u64(), Some(NR_CELL_IDENTITY));
    }

    #[test]
    fn test_default_report_style() {
        let rfd = default_ran_function_description(&E2ToolkitConfig::default(), PLMN).unwrap();
        let style = &rfd.ric_report_style_list[0];
        assert_eq!(style.ric_report_style_name, "Periodic Report");
        assert_eq!(style.ric_action_format_type, 5);
        let ids: Vec<_> = style.meas_info_action_list.iter().filter_map(|m| m.meas_id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(style.meas_info_action_list[6].meas_name, "RRC.Conn.Avg");
    }

    #[test]
    fn test_name_block_follows_config() {
        let config = E2ToolkitConfig::from_yaml_str(
            "kpm:\n  short_name: KPM-LAB\n  oid: 1.3.6.1.4.1.1\n  description: lab monitor\n",
        )
        .unwrap();
        let rfd = default_ran_function_description(&config, PLMN).unwrap();
        assert_eq!(rfd.ran_function_name.ran_function_short_name, "KPM-LAB");
        assert_eq!(rfd.ran_function_name.ran_function_instance, None);
    }

    #[test]
    fn test_ran_function_description_bytes() {
        let config = E2ToolkitConfig::default();
        let wire = ran_function_description_bytes(&config, PLMN, &TaggingCodec).unwrap();
        assert_eq!(wire[0], RAN_FUNCTION_TAG);
        assert!(wire.len() > 1);
    }
}
