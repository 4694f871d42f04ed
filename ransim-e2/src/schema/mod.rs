//! E2AP and E2SM protocol structures
//!
//! These types mirror the ASN.1 definitions of E2AP v2, E2SM-KPM v2 (plus the
//! v1 indication header still emitted for slice/QoS reports) and E2SM-RC v1.
//! They are populated by the builders in this crate and handed unchanged to an
//! external encoder, so field names and optionality follow the ASN.1 modules
//! rather than local convention.

pub mod common;
pub mod e2ap;
pub mod kpm_v1;
pub mod kpm_v2;
pub mod rc_v1;

use crate::error::Result;

/// Schema constraint check run by every builder after assembly.
pub trait Validate {
    /// Returns `E2Error::ValidationFailed` naming the first violated constraint.
    fn validate(&self) -> Result<()>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<()> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<()> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Checks a SIZE constraint on a list or string.
pub(crate) fn check_size(
    structure: &'static str,
    field: &str,
    len: usize,
    min: usize,
    max: usize,
) -> Result<()> {
    if len < min || len > max {
        return Err(crate::error::E2Error::validation(
            structure,
            format!("{field} size {len} outside {min}..={max}"),
        ));
    }
    Ok(())
}

/// Checks a value range constraint on an integer.
pub(crate) fn check_range(
    structure: &'static str,
    field: &str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<()> {
    if value < min || value > max {
        return Err(crate::error::E2Error::validation(
            structure,
            format!("{field} {value} outside {min}..={max}"),
        ));
    }
    Ok(())
}

/// Runs `validate` on a freshly built structure and hands it back.
pub(crate) fn validated<T: Validate>(value: T) -> Result<T> {
    value.validate().inspect_err(|e| {
        tracing::debug!(error = %e, "built structure rejected");
    })?;
    Ok(value)
}
