//! RAN function description composition tests

use integration_tests::mock_codec::RAN_FUNCTION_TAG;
use integration_tests::test_fixtures::{test_cell, test_node_id, TEST_PLMN};
use integration_tests::{init_test_logging, MockCodec, TestResult};
use ransim_common::E2ToolkitConfig;
use ransim_e2::kpm::payloads::{default_ran_function_description, ran_function_description_bytes};
use ransim_e2::kpm::{
    RanFunctionDescriptionBuilder, RicEventTriggerStyleItemBuilder, RicKpmNodeItemBuilder,
    RicReportStyleItemBuilder,
};
use ransim_e2::schema::kpm_v2::RanFunctionDescription;
use ransim_e2::{decode_canonical, E2Error, EncodingError, WireKind};

fn composed() -> Result<RanFunctionDescription, E2Error> {
    let config = E2ToolkitConfig::default();
    let node = RicKpmNodeItemBuilder::new()
        .with_global_kpm_node_id(test_node_id())
        .add_cell_measurement_object(test_cell("ONF", 0xabcdef012))
        .build()?;
    let event_trigger = RicEventTriggerStyleItemBuilder::new()
        .with_style_type(1)
        .with_style_name("Periodic Report")
        .with_format_type(5)
        .build()?;
    let report = ransim_e2::kpm::payloads::KPM_MEASUREMENTS
        .iter()
        .fold(RicReportStyleItemBuilder::new(), |b, &(name, id)| {
            b.add_measurement(name, Some(id))
        })
        .with_style_type(1)
        .with_style_name("Periodic Report")
        .with_action_format_type(5)
        .with_indication_header_format_type(1)
        .with_indication_message_format_type(1)
        .build()?;

    RanFunctionDescriptionBuilder::from_config(&config.kpm)
        .add_kpm_node(node)
        .add_event_trigger_style(event_trigger)
        .add_report_style(report)
        .build()
}

#[test]
fn test_leaf_composition_matches_default_payload() -> TestResult {
    init_test_logging();
    let default = default_ran_function_description(&E2ToolkitConfig::default(), TEST_PLMN)?;
    assert_eq!(composed()?, default);
    Ok(())
}

#[test]
fn test_multiple_nodes_and_styles_keep_order() -> TestResult {
    init_test_logging();
    let node = |cells: &[(&str, u64)]| {
        cells
            .iter()
            .fold(
                RicKpmNodeItemBuilder::new().with_global_kpm_node_id(test_node_id()),
                |b, &(name, id)| b.add_cell_measurement_object(test_cell(name, id)),
            )
            .build()
    };
    let report = |style_type: i32, name: &str| {
        RicReportStyleItemBuilder::new()
            .with_style_type(style_type)
            .with_style_name(name)
            .add_measurement("RRC.Conn.Avg", Some(7))
            .build()
    };

    let rfd = RanFunctionDescriptionBuilder::new()
        .with_short_name("ORAN-E2SM-KPM")
        .with_e2sm_oid("1.3.6.1.4.1.53148.1.2.2.2")
        .with_description("KPM 2.0 Monitor")
        .add_kpm_node(node(&[("cell-1", 1), ("cell-2", 2)])?)
        .add_kpm_node(node(&[])?)
        .add_report_style(report(2, "B")?)
        .add_report_style(report(1, "A")?)
        .add_report_style(report(2, "B again")?)
        .build()?;

    assert_eq!(rfd.ric_kpm_node_list.len(), 2);
    assert_eq!(rfd.ric_kpm_node_list[0].cell_measurement_object_list.len(), 2);
    assert!(rfd.ric_kpm_node_list[1].cell_measurement_object_list.is_empty());
    let styles: Vec<_> = rfd
        .ric_report_style_list
        .iter()
        .map(|s| (s.ric_report_style_type, s.ric_report_style_name.as_str()))
        .collect();
    assert_eq!(styles, [(2, "B"), (1, "A"), (2, "B again")]);
    Ok(())
}

#[test]
fn test_default_payload_through_codec() -> TestResult {
    init_test_logging();
    let codec = MockCodec::new("e2sm_kpm_v2");
    let config = E2ToolkitConfig::default();
    let wire = ran_function_description_bytes(&config, TEST_PLMN, &codec)?;

    assert_eq!(wire[0], RAN_FUNCTION_TAG);
    let calls = codec.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].kind, WireKind::RanFunctionDescription);

    let decoded: RanFunctionDescription = decode_canonical(&calls[0].canonical)?;
    assert_eq!(decoded, default_ran_function_description(&config, TEST_PLMN)?);
    Ok(())
}

#[test]
fn test_codec_failure_is_reported() {
    init_test_logging();
    let codec = MockCodec::failing("e2sm_kpm_v2", "per: value out of range");
    let err = ran_function_description_bytes(&E2ToolkitConfig::default(), TEST_PLMN, &codec)
        .unwrap_err();
    match err {
        E2Error::EncodingFailed(EncodingError::ServiceModel { model, reason }) => {
            assert_eq!(model, "e2sm_kpm_v2");
            assert_eq!(reason, "per: value out of range");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
