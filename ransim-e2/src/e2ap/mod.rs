//! E2AP procedure builders

pub mod error_indication;

pub use error_indication::ErrorIndicationBuilder;
