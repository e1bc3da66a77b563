//! Error types for inset layout.

use thiserror::Error;

/// Errors that can occur while laying out insets.
///
/// Failing to find a free position is not an error: searches return
/// `Ok(None)` and the caller decides what to do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The size factor must be a positive finite number.
    #[error("invalid size factor {0}: must be positive and finite")]
    InvalidSizeFactor(f64),

    /// An axis range or box has no extent.
    #[error("degenerate {axis} range [{min}, {max}]")]
    DegenerateRange { axis: &'static str, min: f64, max: f64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

impl LayoutError {
    /// Create a DegenerateRange error.
    pub fn degenerate(axis: &'static str, min: f64, max: f64) -> Self {
        Self::DegenerateRange { axis, min, max }
    }
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
