//! Measurement info, data and UE condition items

use crate::error::{E2Error, Result};
use crate::schema::kpm_v2::{
    LabelInfoItem, MatchingCondItem, MeasurementCondUeidItem, MeasurementDataItem,
    MeasurementInfoItem, MeasurementLabel, MeasurementRecordItem, MeasurementType, TestCondInfo,
};
use crate::schema::validated;

impl MeasurementType {
    /// Measurement identified by name.
    pub fn name(name: impl Into<String>) -> Result<Self> {
        validated(MeasurementType::Name(name.into()))
    }

    /// Measurement identified by id.
    pub fn id(id: i32) -> Result<Self> {
        validated(MeasurementType::Id(id))
    }
}

impl From<u32> for MeasurementRecordItem {
    fn from(value: u32) -> Self {
        MeasurementRecordItem::Integer(i64::from(value))
    }
}

impl From<f64> for MeasurementRecordItem {
    fn from(value: f64) -> Self {
        MeasurementRecordItem::Real(value)
    }
}

/// Builder for a [`MeasurementInfoItem`].
///
/// The measurement type is required and at least one label must be given.
#[derive(Debug, Clone, Default)]
pub struct MeasurementInfoItemBuilder {
    meas_type: Option<MeasurementType>,
    labels: Vec<LabelInfoItem>,
}

impl MeasurementInfoItemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the measurement type.
    pub fn with_meas_type(mut self, meas_type: MeasurementType) -> Self {
        self.meas_type = Some(meas_type);
        self
    }

    /// Replace the label list.
    pub fn with_labels(mut self, labels: Vec<LabelInfoItem>) -> Self {
        self.labels = labels;
        self
    }

    /// Append one label.
    pub fn add_label(mut self, label: MeasurementLabel) -> Self {
        self.labels.push(LabelInfoItem { meas_label: label });
        self
    }

    /// Assembles and validates the item.
    pub fn build(self) -> Result<MeasurementInfoItem> {
        let meas_type = self
            .meas_type
            .ok_or_else(|| E2Error::structural("meas_type", "not set"))?;
        validated(MeasurementInfoItem {
            meas_type,
            label_info_list: self.labels,
        })
    }
}

/// Builder for a [`MeasurementDataItem`].
#[derive(Debug, Clone, Default)]
pub struct MeasurementDataItemBuilder {
    records: Vec<MeasurementRecordItem>,
    incomplete: bool,
}

impl MeasurementDataItemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the records.
    pub fn with_records(mut self, records: &[MeasurementRecordItem]) -> Self {
        self.records = records.to_vec();
        self
    }

    /// Append one record.
    pub fn add_record(mut self, record: impl Into<MeasurementRecordItem>) -> Self {
        self.records.push(record.into());
        self
    }

    /// Append a record with no value.
    pub fn add_no_value(mut self) -> Self {
        self.records.push(MeasurementRecordItem::NoValue);
        self
    }

    /// Mark the records as incomplete.
    pub fn with_incomplete_flag(mut self, incomplete: bool) -> Self {
        self.incomplete = incomplete;
        self
    }

    /// Assembles and validates the item.
    pub fn build(self) -> Result<MeasurementDataItem> {
        validated(MeasurementDataItem {
            meas_record: self.records,
            incomplete_flag: self.incomplete,
        })
    }
}

/// Builder for a format 2 [`MeasurementCondUeidItem`].
#[derive(Debug, Clone, Default)]
pub struct MeasurementCondUeidItemBuilder {
    meas_type: Option<MeasurementType>,
    matching_cond: Vec<MatchingCondItem>,
    matching_ueids: Vec<Vec<u8>>,
}

impl MeasurementCondUeidItemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the measurement type.
    pub fn with_meas_type(mut self, meas_type: MeasurementType) -> Self {
        self.meas_type = Some(meas_type);
        self
    }

    /// Match on a measurement label.
    pub fn add_label_condition(mut self, label: MeasurementLabel) -> Self {
        self.matching_cond.push(MatchingCondItem::MeasLabel(label));
        self
    }

    /// Match on a test condition.
    pub fn add_test_condition(mut self, test: TestCondInfo) -> Self {
        self.matching_cond.push(MatchingCondItem::TestCondInfo(test));
        self
    }

    /// Append a matching UE identity (encoded UEID).
    pub fn add_matching_ueid(mut self, ueid: &[u8]) -> Self {
        self.matching_ueids.push(ueid.to_vec());
        self
    }

    /// Assembles and validates the item.
    pub fn build(self) -> Result<MeasurementCondUeidItem> {
        let meas_type = self
            .meas_type
            .ok_or_else(|| E2Error::structural("meas_type", "not set"))?;
        validated(MeasurementCondUeidItem {
            meas_type,
            matching_cond: self.matching_cond,
            matching_ueid_list: self.matching_ueids,
        })
    }
}
