//! E2SM-KPM v2 indication messages
//!
//! Format 1 reports cell level measurements. Format 2 reports per-UE
//! measurements selected by matching conditions.

use bytes::Bytes;

use crate::codec::{to_wire, ServiceModelCodec, WireKind};
use crate::error::Result;
use crate::schema::kpm_v2::{
    IndicationMessage, IndicationMessageFormat, IndicationMessageFormat1, IndicationMessageFormat2,
    MeasurementCondUeidItem, MeasurementDataItem, MeasurementInfoItem,
};
use crate::schema::validated;

/// Builder for a format 1 [`IndicationMessage`].
///
/// Every data item must carry one record per measurement info item when an
/// info list is given.
#[derive(Debug, Clone, Default)]
pub struct IndicationMessageFormat1Builder {
    subscription_id: i64,
    cell_obj_id: Option<String>,
    granularity: Option<u32>,
    meas_info_list: Option<Vec<MeasurementInfoItem>>,
    meas_data: Vec<MeasurementDataItem>,
}

impl IndicationMessageFormat1Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subscription id.
    pub fn with_subscription_id(mut self, id: i64) -> Self {
        self.subscription_id = id;
        self
    }

    /// Set the cell object id.
    pub fn with_cell_obj_id(mut self, id: impl Into<String>) -> Self {
        self.cell_obj_id = Some(id.into());
        self
    }

    /// Set the granularity period in milliseconds.
    pub fn with_granularity_period(mut self, period_ms: u32) -> Self {
        self.granularity = Some(period_ms);
        self
    }

    /// Set the measurement info list.
    pub fn with_meas_info_list(mut self, items: Vec<MeasurementInfoItem>) -> Self {
        self.meas_info_list = Some(items);
        self
    }

    /// Replace the measurement data.
    pub fn with_meas_data(mut self, data: Vec<MeasurementDataItem>) -> Self {
        self.meas_data = data;
        self
    }

    /// Append one measurement data item.
    pub fn add_meas_data(mut self, data: MeasurementDataItem) -> Self {
        self.meas_data.push(data);
        self
    }

    /// Assembles and validates the message.
    pub fn build(self) -> Result<IndicationMessage> {
        validated(IndicationMessage {
            format: IndicationMessageFormat::Format1(IndicationMessageFormat1 {
                subscript_id: self.subscription_id,
                cell_obj_id: self.cell_obj_id,
                granul_period: self.granularity,
                meas_info_list: self.meas_info_list,
                meas_data: self.meas_data,
            }),
        })
    }

    /// Builds the message and encodes it through `codec`.
    pub fn to_wire_bytes<C: ServiceModelCodec + ?Sized>(self, codec: &C) -> Result<Bytes> {
        let message = self.build()?;
        to_wire(&message, WireKind::IndicationMessage, codec)
    }
}

/// Builder for a format 2 [`IndicationMessage`].
#[derive(Debug, Clone, Default)]
pub struct IndicationMessageFormat2Builder {
    subscription_id: i64,
    cell_obj_id: Option<String>,
    granularity: Option<u32>,
    meas_cond_ueid_list: Vec<MeasurementCondUeidItem>,
    meas_data: Vec<MeasurementDataItem>,
}

impl IndicationMessageFormat2Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subscription id.
    pub fn with_subscription_id(mut self, id: i64) -> Self {
        self.subscription_id = id;
        self
    }

    /// Set the cell object id.
    pub fn with_cell_obj_id(mut self, id: impl Into<String>) -> Self {
        self.cell_obj_id = Some(id.into());
        self
    }

    /// Set the granularity period in milliseconds.
    pub fn with_granularity_period(mut self, period_ms: u32) -> Self {
        self.granularity = Some(period_ms);
        self
    }

    /// Replace the measurement condition list.
    pub fn with_meas_cond_ueid_list(mut self, items: Vec<MeasurementCondUeidItem>) -> Self {
        self.meas_cond_ueid_list = items;
        self
    }

    /// Append one measurement condition.
    pub fn add_meas_cond_ueid(mut self, item: MeasurementCondUeidItem) -> Self {
        self.meas_cond_ueid_list.push(item);
        self
    }

    /// Replace the measurement data.
    pub fn with_meas_data(mut self, data: Vec<MeasurementDataItem>) -> Self {
        self.meas_data = data;
        self
    }

    /// Append one measurement data item.
    pub fn add_meas_data(mut self, data: MeasurementDataItem) -> Self {
        self.meas_data.push(data);
        self
    }

    /// Assembles and validates the message.
    pub fn build(self) -> Result<IndicationMessage> {
        validated(IndicationMessage {
            format: IndicationMessageFormat::Format2(IndicationMessageFormat2 {
                subscript_id: self.subscription_id,
                cell_obj_id: self.cell_obj_id,
                granul_period: self.granularity,
                meas_cond_ueid_list: self.meas_cond_ueid_list,
                meas_data: self.meas_data,
            }),
        })
    }

    /// Builds the message and encodes it through `codec`.
    pub fn to_wire_bytes<C: ServiceModelCodec + ?Sized>(self, codec: &C) -> Result<Bytes> {
        let message = self.build()?;
        to_wire(&message, WireKind::IndicationMessage, codec)
    }
}
