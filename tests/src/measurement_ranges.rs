//! Measurement classification tests

use std::thread;

use integration_tests::init_test_logging;
use ransim_common::measurement::{qoffset_table, time_to_trigger_table};
use ransim_common::{
    classify_qoffset, classify_time_to_trigger, Error, QOffsetRange, RangeEntry, RangeTable,
    TimeToTrigger,
};

#[test]
fn test_qoffset_classification() {
    init_test_logging();
    assert_eq!(classify_qoffset(-30), QOffsetRange::Minus24dB);
    assert_eq!(classify_qoffset(-23), QOffsetRange::Minus22dB);
    assert_eq!(classify_qoffset(-1), QOffsetRange::Zero);
    assert_eq!(classify_qoffset(0), QOffsetRange::Plus1dB);
    assert_eq!(classify_qoffset(7), QOffsetRange::Plus8dB);
    assert_eq!(classify_qoffset(i32::MAX), QOffsetRange::Plus24dB);
}

#[test]
fn test_time_to_trigger_classification() {
    init_test_logging();
    assert_eq!(classify_time_to_trigger(0), TimeToTrigger::Ms0);
    assert_eq!(classify_time_to_trigger(100), TimeToTrigger::Ms100);
    assert_eq!(classify_time_to_trigger(300), TimeToTrigger::Ms256);
    assert_eq!(classify_time_to_trigger(10_000), TimeToTrigger::Ms5120);
}

#[test]
fn test_tables_shared_across_threads() {
    init_test_logging();
    let results: Vec<_> = thread::scope(|s| {
        (0..4)
            .map(|_| s.spawn(|| (classify_qoffset(-5), classify_time_to_trigger(640))))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });
    assert!(results
        .iter()
        .all(|r| *r == (QOffsetRange::Minus4dB, TimeToTrigger::Ms640)));
    assert!(std::ptr::eq(qoffset_table(), qoffset_table()));
    assert_eq!(time_to_trigger_table().len(), 16);
}

#[test]
fn test_custom_table_rejects_overlap() {
    init_test_logging();
    let result = RangeTable::new(
        vec![RangeEntry::new(10, 20, 'b'), RangeEntry::new(0, 11, 'a')],
        '-',
    );
    assert!(matches!(result, Err(Error::RangeTable(_))));

    let table = RangeTable::new(
        vec![RangeEntry::new(10, 20, 'b'), RangeEntry::new(0, 10, 'a')],
        '-',
    )
    .unwrap();
    assert_eq!(table.search(9), 'a');
    assert_eq!(table.search(10), 'b');
    assert_eq!(table.search(20), '-');
}
