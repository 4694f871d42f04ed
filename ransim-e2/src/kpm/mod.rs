//! E2SM-KPM v2 builders
//!
//! Leaf builders (node identity, cell object, styles, measurements, labels)
//! produce the items that the composite builders aggregate into a RAN
//! function description or an indication. [`payloads`] assembles the RAN
//! function this simulator advertises.

pub mod cell_object;
pub mod global_node_id;
pub mod indication_header;
pub mod indication_message;
pub mod label_info;
pub mod measurement;
pub mod node_item;
pub mod payloads;
pub mod ran_function_description;
pub mod styles;

pub use cell_object::CellMeasurementObjectItemBuilder;
pub use global_node_id::GlobalKpmNodeIdBuilder;
pub use indication_header::IndicationHeaderBuilder;
pub use indication_message::{IndicationMessageFormat1Builder, IndicationMessageFormat2Builder};
pub use label_info::LabelInfoBuilder;
pub use measurement::{
    MeasurementCondUeidItemBuilder, MeasurementDataItemBuilder, MeasurementInfoItemBuilder,
};
pub use node_item::RicKpmNodeItemBuilder;
pub use ran_function_description::RanFunctionDescriptionBuilder;
pub use styles::{RicEventTriggerStyleItemBuilder, RicReportStyleItemBuilder};
