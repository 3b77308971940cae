//! Error handling for GridSketch
//!
//! Only configuration problems are raised as errors. Degenerate geometry is
//! reported through `is_valid` flags on computed shapes, and references to
//! missing objects are absorbed by the store as no-ops, so neither has a
//! variant here.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Designer error type
///
/// Raised immediately to the caller that requested an invalid setup, such as
/// a non-positive cell size or viewport dimension. Values are never clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A size or scale parameter was zero, negative or not finite
    #[error("Invalid configuration: {parameter} must be a positive finite number, got {value}")]
    InvalidConfiguration {
        /// The name of the offending parameter.
        parameter: String,
        /// The rejected value.
        value: f64,
    },
}

impl DesignerError {
    /// Create an `InvalidConfiguration` error for `parameter`.
    pub fn invalid_configuration(parameter: impl Into<String>, value: f64) -> Self {
        Self::InvalidConfiguration {
            parameter: parameter.into(),
            value,
        }
    }
}

/// Check that `value` is a positive, finite number.
///
/// Shared by every component that accepts a size or scale so that the
/// rejection message is identical everywhere.
pub fn ensure_positive(parameter: &str, value: f64) -> Result<f64, DesignerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::warn!(parameter, value, "rejected non-positive configuration value");
        Err(DesignerError::invalid_configuration(parameter, value))
    }
}
