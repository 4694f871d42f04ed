//! KPM and RC indications pushed through a mock service model codec

use integration_tests::mock_codec::{HEADER_TAG, MESSAGE_TAG};
use integration_tests::test_fixtures::{test_node_id, test_plmn_id, TEST_GNB_ID};
use integration_tests::{init_test_logging, MockCodec, TestResult};
use ransim_e2::kpm::{
    IndicationHeaderBuilder, IndicationMessageFormat1Builder, LabelInfoBuilder,
    MeasurementDataItemBuilder, MeasurementInfoItemBuilder,
};
use ransim_e2::rc::{
    GnbUeidBuilder, IndicationHeaderFormat2Builder, IndicationMessageFormat5Builder,
};
use ransim_e2::schema::kpm_v2::{self, MeasurementType};
use ransim_e2::schema::rc_v1::{self, RanParameterValue};
use ransim_e2::{decode_canonical, kpm_v1, E2Error, WireKind};

#[test]
fn test_kpm_report_header_and_message() -> TestResult {
    init_test_logging();
    let codec = MockCodec::new("e2sm_kpm_v2");

    let header = IndicationHeaderBuilder::new()
        .with_timestamp_secs(0x6553_F100)
        .with_sender_name("ransim")
        .with_sender_type("gNB")
        .with_vendor_name("ONF")
        .with_global_kpm_node_id(test_node_id())
        .to_wire_bytes(&codec)?;

    let names = ["RRC.Conn.Avg", "RRC.Conn.Max"];
    let info = names
        .iter()
        .map(|name| {
            MeasurementInfoItemBuilder::new()
                .with_meas_type(MeasurementType::name(*name)?)
                .add_label(LabelInfoBuilder::new().with_sum(true).build()?)
                .build()
        })
        .collect::<Result<Vec<_>, E2Error>>()?;
    let data = MeasurementDataItemBuilder::new()
        .add_record(3u32)
        .add_record(5u32)
        .build()?;
    let message = IndicationMessageFormat1Builder::new()
        .with_subscription_id(1)
        .with_cell_obj_id("ONF")
        .with_granularity_period(1000)
        .with_meas_info_list(info)
        .add_meas_data(data)
        .to_wire_bytes(&codec)?;

    assert_eq!(header[0], HEADER_TAG);
    assert_eq!(message[0], MESSAGE_TAG);

    let calls = codec.calls();
    let kinds: Vec<_> = calls.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, [WireKind::IndicationHeader, WireKind::IndicationMessage]);

    let decoded: kpm_v2::IndicationHeader = decode_canonical(&calls[0].canonical)?;
    let kpm_v2::IndicationHeaderFormat::Format1(f1) = decoded.format;
    assert_eq!(f1.kpm_node_id, Some(test_node_id()));
    Ok(())
}

#[test]
fn test_invalid_message_never_reaches_codec() {
    init_test_logging();
    let codec = MockCodec::new("e2sm_kpm_v2");
    let result = IndicationMessageFormat1Builder::new()
        .with_subscription_id(1)
        .to_wire_bytes(&codec);
    assert!(matches!(result, Err(E2Error::ValidationFailed { .. })));
    assert!(codec.calls().is_empty());
}

#[test]
fn test_kpm_v1_slice_header() -> TestResult {
    init_test_logging();
    let codec = MockCodec::new("e2sm_kpm_v1");
    let plmn = test_plmn_id();

    kpm_v1::IndicationHeaderBuilder::new()
        .with_plmn_id(plmn.as_bytes())
        .with_gnb_id(TEST_GNB_ID)
        .with_gnb_cu_up_id(12345)
        .with_gnb_du_id(6789)
        .with_sst(&[1])
        .with_sd(&[0x00, 0x00, 0x01])
        .with_five_qi(9)
        .with_qci(9)
        .to_wire_bytes(&codec)?;

    let calls = codec.calls();
    let decoded: ransim_e2::schema::kpm_v1::IndicationHeader =
        decode_canonical(&calls[0].canonical)?;
    let ransim_e2::schema::kpm_v1::IndicationHeader::Format1(f1) = decoded;
    assert_eq!(f1.plmn_identity, plmn);
    assert_eq!(f1.slice_id.sst, vec![1]);
    Ok(())
}

#[test]
fn test_rc_insert_indication() -> TestResult {
    init_test_logging();
    let codec = MockCodec::new("e2sm_rc");

    let ue_id = GnbUeidBuilder::new()
        .with_amf_ue_ngap_id(1)
        .with_guami_plmn_id(test_plmn_id().as_bytes())
        .with_amf_region_id(2)
        .with_amf_set_id(1)
        .with_amf_pointer(0)
        .build()?;
    IndicationHeaderFormat2Builder::new()
        .with_ue_id(ue_id.clone())
        .with_insert_style_type(3)
        .with_insert_indication_id(1)
        .to_wire_bytes(&codec)?;
    IndicationMessageFormat5Builder::new()
        .add_key_parameter(1, RanParameterValue::Integer(120))
        .add_parameter(2, Some(RanParameterValue::Boolean(false)))
        .to_wire_bytes(&codec)?;

    let calls = codec.calls();
    assert_eq!(calls.len(), 2);
    let header: rc_v1::IndicationHeader = decode_canonical(&calls[0].canonical)?;
    let rc_v1::IndicationHeaderFormat::Format2(f2) = header.format else {
        panic!("expected format 2");
    };
    assert_eq!(f2.ue_id, ue_id);
    Ok(())
}

#[test]
fn test_encoding_failure_after_validation() {
    init_test_logging();
    let codec = MockCodec::failing("e2sm_rc", "aper: extension not supported");
    let result = IndicationMessageFormat5Builder::new()
        .add_key_parameter(1, RanParameterValue::Integer(1))
        .to_wire_bytes(&codec);
    assert!(matches!(result, Err(E2Error::EncodingFailed(_))));
    assert_eq!(codec.calls().len(), 1);
}
