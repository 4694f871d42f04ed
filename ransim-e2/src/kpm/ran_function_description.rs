//! E2SM-KPM RAN function description
//!
//! The description is advertised in the RAN function list of E2 Setup and
//! RIC Service Update. It names the function and lists its nodes, its event
//! trigger styles and its report styles.

use bytes::Bytes;

use ransim_common::RanFunctionConfig;

use crate::codec::{to_wire, ServiceModelCodec, WireKind};
use crate::error::Result;
use crate::schema::kpm_v2::{
    RanFunctionDescription, RanFunctionName, RicEventTriggerStyleItem, RicKpmNodeItem,
    RicReportStyleItem,
};
use crate::schema::validated;

/// Builder for a [`RanFunctionDescription`].
///
/// Lists keep insertion order and duplicate style types are kept as given.
#[derive(Debug, Clone, Default)]
pub struct RanFunctionDescriptionBuilder {
    name: RanFunctionName,
    nodes: Vec<RicKpmNodeItem>,
    event_trigger_styles: Vec<RicEventTriggerStyleItem>,
    report_styles: Vec<RicReportStyleItem>,
}

impl RanFunctionDescriptionBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the name block taken from `config`.
    pub fn from_config(config: &RanFunctionConfig) -> Self {
        let mut builder = Self::new()
            .with_short_name(config.short_name.clone())
            .with_e2sm_oid(config.oid.clone())
            .with_description(config.description.clone());
        builder.name.ran_function_instance = config.instance;
        builder
    }

    /// Set the short name.
    pub fn with_short_name(mut self, name: impl Into<String>) -> Self {
        self.name.ran_function_short_name = name.into();
        self
    }

    /// Set the service model OID.
    pub fn with_e2sm_oid(mut self, oid: impl Into<String>) -> Self {
        self.name.ran_function_e2sm_oid = oid.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.name.ran_function_description = description.into();
        self
    }

    /// Set the instance number.
    pub fn with_instance(mut self, instance: i32) -> Self {
        self.name.ran_function_instance = Some(instance);
        self
    }

    /// Replace the node list.
    pub fn with_kpm_nodes(mut self, nodes: Vec<RicKpmNodeItem>) -> Self {
        self.nodes = nodes;
        self
    }

    /// Append one node.
    pub fn add_kpm_node(mut self, node: RicKpmNodeItem) -> Self {
        self.nodes.push(node);
        self
    }

    /// Replace the event trigger style list.
    pub fn with_event_trigger_styles(mut self, styles: Vec<RicEventTriggerStyleItem>) -> Self {
        self.event_trigger_styles = styles;
        self
    }

    /// Append one event trigger style.
    pub fn add_event_trigger_style(mut self, style: RicEventTriggerStyleItem) -> Self {
        self.event_trigger_styles.push(style);
        self
    }

    /// Replace the report style list.
    pub fn with_report_styles(mut self, styles: Vec<RicReportStyleItem>) -> Self {
        self.report_styles = styles;
        self
    }

    /// Append one report style.
    pub fn add_report_style(mut self, style: RicReportStyleItem) -> Self {
        self.report_styles.push(style);
        self
    }

    /// Assembles and validates the description.
    pub fn build(self) -> Result<RanFunctionDescription> {
        tracing::debug!(
            short_name = %self.name.ran_function_short_name,
            nodes = self.nodes.len(),
            event_trigger_styles = self.event_trigger_styles.len(),
            report_styles = self.report_styles.len(),
            "building RAN function description"
        );
        validated(RanFunctionDescription {
            ran_function_name: self.name,
            ric_kpm_node_list: self.nodes,
            ric_event_trigger_style_list: self.event_trigger_styles,
            ric_report_style_list: self.report_styles,
        })
    }

    /// Builds the description and encodes it through `codec`.
    pub fn to_wire_bytes<C: ServiceModelCodec + ?Sized>(self, codec: &C) -> Result<Bytes> {
        let description = self.build()?;
        to_wire(&description, WireKind::RanFunctionDescription, codec)
    }
}
