//! Error Indication tests with pooled transaction identifiers

use std::collections::HashSet;
use std::thread;

use integration_tests::{init_test_logging, TestResult};
use ransim_common::E2ToolkitConfig;
use ransim_e2::e2ap::ErrorIndicationBuilder;
use ransim_e2::schema::common::Criticality;
use ransim_e2::schema::e2ap::{
    Cause, CauseRicRequest, ErrorIndicationIeValue, TriggeringMessage, ID_TRANSACTION_ID,
};
use ransim_e2::{E2Error, TransactionIdPool};

fn transaction_id_of(msg: &ransim_e2::schema::e2ap::ErrorIndication) -> Option<u32> {
    match msg.ie(ID_TRANSACTION_ID).map(|ie| &ie.value) {
        Some(ErrorIndicationIeValue::TransactionId(id)) => Some(id.0),
        _ => None,
    }
}

#[test]
fn test_error_indications_carry_distinct_pooled_ids() -> TestResult {
    init_test_logging();
    let pool = TransactionIdPool::from_config(&E2ToolkitConfig::default());

    let mut seen = HashSet::new();
    for request in 0..16 {
        let tid = pool.new_id()?;
        let msg = ErrorIndicationBuilder::new()
            .with_transaction_id(tid)
            .with_request_id(request)
            .with_ran_function_id(1)
            .with_cause(Cause::RicRequest(CauseRicRequest::RequestIdUnknown))
            .build()?;
        assert_eq!(transaction_id_of(&msg), Some(tid.value()));
        assert!(seen.insert(tid));
    }
    assert_eq!(pool.in_use(), 16);

    for tid in seen {
        pool.release(tid);
    }
    assert_eq!(pool.in_use(), 0);
    Ok(())
}

#[test]
fn test_concurrent_request_paths() {
    init_test_logging();
    let pool = TransactionIdPool::new(256);

    let ids: Vec<u32> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let pool = &pool;
                s.spawn(move || {
                    (0..64)
                        .map(|n| {
                            let tid = pool.new_id().unwrap();
                            let msg = ErrorIndicationBuilder::new()
                                .with_transaction_id(tid)
                                .with_request_id(worker * 100 + n)
                                .build()
                                .unwrap();
                            transaction_id_of(&msg).unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 256);
    assert!(matches!(
        pool.new_id(),
        Err(E2Error::ResourceExhausted { capacity: 256 })
    ));
}

#[test]
fn test_reporting_failed_procedure() -> TestResult {
    init_test_logging();
    let msg = ErrorIndicationBuilder::new()
        .with_request_id(42)
        .with_ric_instance_id(1)
        .with_ran_function_id(2)
        .with_failure_procedure_code(8)
        .with_failure_triggering_message(TriggeringMessage::InitiatingMessage)
        .with_failure_criticality(Criticality::Reject)
        .build()?;

    let request = msg.ric_request_id().expect("request id present");
    assert_eq!(request.ric_requestor_id, 42);
    assert_eq!(transaction_id_of(&msg), None);
    assert_eq!(msg.protocol_ies.len(), 3);
    Ok(())
}
