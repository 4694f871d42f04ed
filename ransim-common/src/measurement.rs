//! Measurement-configuration classification tables.
//!
//! Cells carry raw integer settings (individual offsets in dB, time-to-trigger
//! in ms) while the measurement configuration IEs only accept the enumerated
//! steps defined by 3GPP TS 38.331. The tables here translate one into the
//! other.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::range_table::{RangeEntry, RangeTable};

/// Upper bound that places `i32::MAX` inside the last interval.
const ABOVE_I32: i64 = i32::MAX as i64 + 1;
const BELOW_I32: i64 = i32::MIN as i64;

/// Cell individual offset (Q-OffsetRange), -24 dB to +24 dB.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QOffsetRange {
    Minus24dB,
    Minus22dB,
    Minus20dB,
    Minus18dB,
    Minus16dB,
    Minus14dB,
    Minus12dB,
    Minus10dB,
    Minus8dB,
    Minus6dB,
    Minus5dB,
    Minus4dB,
    Minus3dB,
    Minus2dB,
    Minus1dB,
    Zero,
    Plus1dB,
    Plus2dB,
    Plus3dB,
    Plus4dB,
    Plus5dB,
    Plus6dB,
    Plus8dB,
    Plus10dB,
    Plus12dB,
    Plus14dB,
    Plus16dB,
    Plus18dB,
    Plus20dB,
    Plus22dB,
    Plus24dB,
}

impl QOffsetRange {
    /// Returns the offset in dB.
    pub fn db(self) -> i32 {
        use QOffsetRange::*;
        match self {
            Minus24dB => -24,
            Minus22dB => -22,
            Minus20dB => -20,
            Minus18dB => -18,
            Minus16dB => -16,
            Minus14dB => -14,
            Minus12dB => -12,
            Minus10dB => -10,
            Minus8dB => -8,
            Minus6dB => -6,
            Minus5dB => -5,
            Minus4dB => -4,
            Minus3dB => -3,
            Minus2dB => -2,
            Minus1dB => -1,
            Zero => 0,
            Plus1dB => 1,
            Plus2dB => 2,
            Plus3dB => 3,
            Plus4dB => 4,
            Plus5dB => 5,
            Plus6dB => 6,
            Plus8dB => 8,
            Plus10dB => 10,
            Plus12dB => 12,
            Plus14dB => 14,
            Plus16dB => 16,
            Plus18dB => 18,
            Plus20dB => 20,
            Plus22dB => 22,
            Plus24dB => 24,
        }
    }

    /// Returns the ASN.1 enumeration index (dB-24 = 0).
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Time-to-trigger, 0 ms to 5120 ms.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeToTrigger {
    Ms0,
    Ms40,
    Ms64,
    Ms80,
    Ms100,
    Ms128,
    Ms160,
    Ms256,
    Ms320,
    Ms480,
    Ms512,
    Ms640,
    Ms1024,
    Ms1280,
    Ms2560,
    Ms5120,
}

impl TimeToTrigger {
    /// Returns the duration in milliseconds.
    pub fn millis(self) -> u32 {
        use TimeToTrigger::*;
        match self {
            Ms0 => 0,
            Ms40 => 40,
            Ms64 => 64,
            Ms80 => 80,
            Ms100 => 100,
            Ms128 => 128,
            Ms160 => 160,
            Ms256 => 256,
            Ms320 => 320,
            Ms480 => 480,
            Ms512 => 512,
            Ms640 => 640,
            Ms1024 => 1024,
            Ms1280 => 1280,
            Ms2560 => 2560,
            Ms5120 => 5120,
        }
    }

    /// Returns the ASN.1 enumeration index (ms0 = 0).
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Classification used when a Q-offset falls outside the table.
pub const QOFFSET_DEFAULT: QOffsetRange = QOffsetRange::Zero;

/// Classification used when a time-to-trigger falls outside the table.
pub const TIME_TO_TRIGGER_DEFAULT: TimeToTrigger = TimeToTrigger::Ms0;

/// Each offset maps to the smallest step strictly above it: `[0, 1)` is
/// `dB1`, `[-1, 0)` is `dB0` and `[6, 8)` is `dB8`. Values below -24
/// saturate at `dB-24`, values from 22 up at `dB24`.
fn qoffset_entries() -> Vec<RangeEntry<QOffsetRange>> {
    use QOffsetRange::*;
    vec![
        RangeEntry::new(BELOW_I32, -24, Minus24dB),
        RangeEntry::new(-24, -22, Minus22dB),
        RangeEntry::new(-22, -20, Minus20dB),
        RangeEntry::new(-20, -18, Minus18dB),
        RangeEntry::new(-18, -16, Minus16dB),
        RangeEntry::new(-16, -14, Minus14dB),
        RangeEntry::new(-14, -12, Minus12dB),
        RangeEntry::new(-12, -10, Minus10dB),
        RangeEntry::new(-10, -8, Minus8dB),
        RangeEntry::new(-8, -6, Minus6dB),
        RangeEntry::new(-6, -5, Minus5dB),
        RangeEntry::new(-5, -4, Minus4dB),
        RangeEntry::new(-4, -3, Minus3dB),
        RangeEntry::new(-3, -2, Minus2dB),
        RangeEntry::new(-2, -1, Minus1dB),
        RangeEntry::new(-1, 0, Zero),
        RangeEntry::new(0, 1, Plus1dB),
        RangeEntry::new(1, 2, Plus2dB),
        RangeEntry::new(2, 3, Plus3dB),
        RangeEntry::new(3, 4, Plus4dB),
        RangeEntry::new(4, 5, Plus5dB),
        RangeEntry::new(5, 6, Plus6dB),
        RangeEntry::new(6, 8, Plus8dB),
        RangeEntry::new(8, 10, Plus10dB),
        RangeEntry::new(10, 12, Plus12dB),
        RangeEntry::new(12, 14, Plus14dB),
        RangeEntry::new(14, 16, Plus16dB),
        RangeEntry::new(16, 18, Plus18dB),
        RangeEntry::new(18, 20, Plus20dB),
        RangeEntry::new(20, 22, Plus22dB),
        RangeEntry::new(22, ABOVE_I32, Plus24dB),
    ]
}

/// Durations round down to the step at or below them.
fn time_to_trigger_entries() -> Vec<RangeEntry<TimeToTrigger>> {
    use TimeToTrigger::*;
    vec![
        RangeEntry::new(BELOW_I32, 40, Ms0),
        RangeEntry::new(40, 64, Ms40),
        RangeEntry::new(64, 80, Ms64),
        RangeEntry::new(80, 100, Ms80),
        RangeEntry::new(100, 128, Ms100),
        RangeEntry::new(128, 160, Ms128),
        RangeEntry::new(160, 256, Ms160),
        RangeEntry::new(256, 320, Ms256),
        RangeEntry::new(320, 480, Ms320),
        RangeEntry::new(480, 512, Ms480),
        RangeEntry::new(512, 640, Ms512),
        RangeEntry::new(640, 1024, Ms640),
        RangeEntry::new(1024, 1280, Ms1024),
        RangeEntry::new(1280, 2560, Ms1280),
        RangeEntry::new(2560, 5120, Ms2560),
        RangeEntry::new(5120, ABOVE_I32, Ms5120),
    ]
}

fn build_static<T: Copy + std::fmt::Debug>(
    name: &str,
    entries: Vec<RangeEntry<T>>,
    default: T,
) -> RangeTable<T> {
    RangeTable::new(entries, default).unwrap_or_else(|e| {
        tracing::error!(table = name, error = %e, "static range table rejected");
        RangeTable::empty(default)
    })
}

/// Returns the shared Q-offset table.
pub fn qoffset_table() -> &'static RangeTable<QOffsetRange> {
    static TABLE: OnceLock<RangeTable<QOffsetRange>> = OnceLock::new();
    TABLE.get_or_init(|| build_static("qoffset", qoffset_entries(), QOFFSET_DEFAULT))
}

/// Returns the shared time-to-trigger table.
pub fn time_to_trigger_table() -> &'static RangeTable<TimeToTrigger> {
    static TABLE: OnceLock<RangeTable<TimeToTrigger>> = OnceLock::new();
    TABLE.get_or_init(|| {
        build_static("time_to_trigger", time_to_trigger_entries(), TIME_TO_TRIGGER_DEFAULT)
    })
}

/// Classifies a cell individual offset given in dB.
pub fn classify_qoffset(db: i32) -> QOffsetRange {
    qoffset_table().search(i64::from(db))
}

/// Classifies a time-to-trigger given in milliseconds.
pub fn classify_time_to_trigger(ms: i32) -> TimeToTrigger {
    time_to_trigger_table().search(i64::from(ms))
}
