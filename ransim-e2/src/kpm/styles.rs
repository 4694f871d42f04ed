//! Event trigger and report styles

use crate::error::Result;
use crate::schema::kpm_v2::{
    MeasurementInfoActionItem, RicEventTriggerStyleItem, RicReportStyleItem,
};
use crate::schema::validated;

/// Builder for a [`RicEventTriggerStyleItem`].
#[derive(Debug, Clone, Default)]
pub struct RicEventTriggerStyleItemBuilder {
    style_type: i32,
    style_name: String,
    format_type: i32,
}

impl RicEventTriggerStyleItemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style type.
    pub fn with_style_type(mut self, style_type: i32) -> Self {
        self.style_type = style_type;
        self
    }

    /// Set the style name.
    pub fn with_style_name(mut self, name: impl Into<String>) -> Self {
        self.style_name = name.into();
        self
    }

    /// Set the event trigger definition format.
    pub fn with_format_type(mut self, format_type: i32) -> Self {
        self.format_type = format_type;
        self
    }

    /// Assembles and validates the style.
    pub fn build(self) -> Result<RicEventTriggerStyleItem> {
        validated(RicEventTriggerStyleItem {
            ric_event_trigger_style_type: self.style_type,
            ric_event_trigger_style_name: self.style_name,
            ric_event_trigger_format_type: self.format_type,
        })
    }
}

/// Builder for a [`RicReportStyleItem`].
///
/// At least one measurement must be offered.
#[derive(Debug, Clone, Default)]
pub struct RicReportStyleItemBuilder {
    style_type: i32,
    style_name: String,
    action_format_type: i32,
    measurements: Vec<MeasurementInfoActionItem>,
    header_format_type: i32,
    message_format_type: i32,
}

impl RicReportStyleItemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style type.
    pub fn with_style_type(mut self, style_type: i32) -> Self {
        self.style_type = style_type;
        self
    }

    /// Set the style name.
    pub fn with_style_name(mut self, name: impl Into<String>) -> Self {
        self.style_name = name.into();
        self
    }

    /// Set the action definition format.
    pub fn with_action_format_type(mut self, format_type: i32) -> Self {
        self.action_format_type = format_type;
        self
    }

    /// Replace the offered measurements.
    pub fn with_measurements(mut self, measurements: Vec<MeasurementInfoActionItem>) -> Self {
        self.measurements = measurements;
        self
    }

    /// Offer one more measurement.
    pub fn add_measurement(mut self, name: impl Into<String>, id: Option<i32>) -> Self {
        self.measurements.push(MeasurementInfoActionItem {
            meas_name: name.into(),
            meas_id: id,
        });
        self
    }

    /// Set the indication header format carried by reports of this style.
    pub fn with_indication_header_format_type(mut self, format_type: i32) -> Self {
        self.header_format_type = format_type;
        self
    }

    /// Set the indication message format carried by reports of this style.
    pub fn with_indication_message_format_type(mut self, format_type: i32) -> Self {
        self.message_format_type = format_type;
        self
    }

    /// Assembles and validates the style.
    pub fn build(self) -> Result<RicReportStyleItem> {
        validated(RicReportStyleItem {
            ric_report_style_type: self.style_type,
            ric_report_style_name: self.style_name,
            ric_action_format_type: self.action_format_type,
            meas_info_action_list: self.measurements,
            ric_indication_header_format_type: self.header_format_type,
            ric_indication_message_format_type: self.message_format_type,
        })
    }
}
