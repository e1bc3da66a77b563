//! Error types for axis resolution.

use thiserror::Error;

use crate::kind::AxisKind;

/// Errors that can occur while resolving coordinate axes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxisError {
    /// No dimension of the requested kind exists for the variable.
    #[error("no {kind} axis found for variable '{variable}'")]
    AxisNotFound { variable: String, kind: AxisKind },

    /// A nearest-index search was attempted on a zero-length axis.
    #[error("axis '{0}' has no values")]
    EmptyAxis(String),

    /// Every difference between the axis values and the target was NaN.
    #[error("no value on axis '{axis}' is comparable with {target}")]
    NotComparable { axis: String, target: f64 },

    /// The `units` attribute of a time axis could not be parsed.
    #[error("invalid time units: {0}")]
    InvalidTimeUnits(String),

    /// A time offset or instant cannot be represented.
    #[error("time value out of range: {0}")]
    TimeOutOfRange(String),
}

impl AxisError {
    /// Create an AxisNotFound error.
    pub fn axis_not_found(variable: impl Into<String>, kind: AxisKind) -> Self {
        Self::AxisNotFound {
            variable: variable.into(),
            kind,
        }
    }

    /// Create an EmptyAxis error.
    pub fn empty_axis(axis: impl Into<String>) -> Self {
        Self::EmptyAxis(axis.into())
    }

    /// Create an InvalidTimeUnits error.
    pub fn invalid_time_units(msg: impl Into<String>) -> Self {
        Self::InvalidTimeUnits(msg.into())
    }
}

/// Result type for axis resolution.
pub type Result<T> = std::result::Result<T, AxisError>;
