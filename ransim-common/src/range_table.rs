//! Sorted interval tables mapping raw measurements onto enumerated values.
//!
//! A [`RangeTable`] is built once from static configuration and is read-only
//! afterwards, so it can be shared freely between threads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One half-open interval `[min, max)` and the classification it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry<T> {
    /// Inclusive lower bound
    pub min: i64,
    /// Exclusive upper bound
    pub max: i64,
    /// Classification for values inside the interval
    pub value: T,
}

impl<T> RangeEntry<T> {
    /// Creates a new entry covering `[min, max)`.
    pub const fn new(min: i64, max: i64, value: T) -> Self {
        Self { min, max, value }
    }

    fn contains(&self, v: i64) -> bool {
        self.min <= v && v < self.max
    }
}

/// A table of disjoint half-open intervals, kept sorted by lower bound.
#[derive(Clone, PartialEq, Eq)]
pub struct RangeTable<T> {
    entries: Vec<RangeEntry<T>>,
    default: T,
}

impl<T: Copy> RangeTable<T> {
    /// Builds a table from unordered entries.
    ///
    /// Entries are sorted by lower bound. Tables with an empty interval
    /// (`min >= max`) or overlapping intervals are rejected, so a constructed
    /// table always satisfies the binary-search precondition.
    pub fn new(mut entries: Vec<RangeEntry<T>>, default: T) -> Result<Self, Error> {
        entries.sort_by_key(|e| e.min);

        if let Some(e) = entries.iter().find(|e| e.min >= e.max) {
            return Err(Error::RangeTable(format!(
                "empty interval [{}, {})",
                e.min, e.max
            )));
        }

        if let Some(w) = entries.windows(2).find(|w| w[1].min < w[0].max) {
            return Err(Error::RangeTable(format!(
                "interval [{}, {}) overlaps [{}, {})",
                w[1].min, w[1].max, w[0].min, w[0].max
            )));
        }

        Ok(Self { entries, default })
    }

    /// A table with no intervals; every lookup yields `default`.
    pub(crate) fn empty(default: T) -> Self {
        Self {
            entries: Vec::new(),
            default,
        }
    }

    /// Classifies `v`, falling back to the table default when no interval
    /// contains it.
    pub fn search(&self, v: i64) -> T {
        // Upper bounds are ascending because the intervals are sorted and disjoint.
        let idx = self.entries.partition_point(|e| e.max <= v);
        match self.entries.get(idx) {
            Some(entry) if entry.contains(v) => entry.value,
            _ => self.default,
        }
    }

    /// Returns the classification used for values outside every interval.
    pub fn default_value(&self) -> T {
        self.default
    }

    /// Returns the entries in ascending order.
    pub fn entries(&self) -> &[RangeEntry<T>] {
        &self.entries
    }

    /// Returns the number of intervals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no intervals.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for RangeTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeTable")
            .field("intervals", &self.entries.len())
            .field("default", &self.default)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer_table() -> RangeTable<&'static str> {
        RangeTable::new(
            vec![RangeEntry::new(0, 100, "0ms"), RangeEntry::new(100, 256, "640ms")],
            "default",
        )
        .unwrap()
    }

    #[test]
    fn test_search_inside_intervals() {
        let table = timer_table();
        assert_eq!(table.search(50), "0ms");
        assert_eq!(table.search(150), "640ms");
    }

    #[test]
    fn test_search_bounds_are_half_open() {
        let table = timer_table();
        assert_eq!(table.search(0), "0ms");
        assert_eq!(table.search(99), "0ms");
        assert_eq!(table.search(100), "640ms");
        assert_eq!(table.search(255), "640ms");
        assert_eq!(table.search(256), "default");
    }

    #[test]
    fn test_search_outside_returns_default() {
        let table = timer_table();
        assert_eq!(table.search(-1), "default");
        assert_eq!(table.search(1000), "default");
        assert_eq!(table.default_value(), "default");
    }

    #[test]
    fn test_search_in_gap_returns_default() {
        let table = RangeTable::new(
            vec![RangeEntry::new(0, 10, 'a'), RangeEntry::new(20, 30, 'b')],
            'z',
        )
        .unwrap();
        assert_eq!(table.search(15), 'z');
        assert_eq!(table.search(20), 'b');
    }

    #[test]
    fn test_new_sorts_entries() {
        let table = RangeTable::new(
            vec![
                RangeEntry::new(100, 256, 2),
                RangeEntry::new(-50, 0, 0),
                RangeEntry::new(0, 100, 1),
            ],
            -1,
        )
        .unwrap();
        let mins: Vec<i64> = table.entries().iter().map(|e| e.min).collect();
        assert_eq!(mins, vec![-50, 0, 100]);
        assert_eq!(table.search(-10), 0);
        assert_eq!(table.search(200), 2);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_new_rejects_overlap() {
        let result = RangeTable::new(
            vec![RangeEntry::new(0, 100, 1), RangeEntry::new(50, 150, 2)],
            0,
        );
        assert!(matches!(result, Err(Error::RangeTable(_))));
    }

    #[test]
    fn test_new_rejects_empty_interval() {
        let result = RangeTable::new(vec![RangeEntry::new(-22, -22, 1)], 0);
        assert!(matches!(result, Err(Error::RangeTable(_))));
    }

    #[test]
    fn test_empty_table_always_defaults() {
        let table: RangeTable<u8> = RangeTable::new(Vec::new(), 7).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.search(0), 7);
    }
}
