//! Error types.
//!
//! Clipping itself never fails; the only rejected input is a clip rectangle
//! that cannot describe a region of the plane.

use thiserror::Error;

/// Errors raised when constructing an [`Extent`](crate::Extent).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ExtentError {
    #[error("extent {axis} must not be negative, got {value}")]
    Negative { axis: Axis, value: f64 },

    #[error("extent {axis} must be finite, got {value}")]
    NonFinite { axis: Axis, value: f64 },
}

/// The dimension an [`ExtentError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ExtentError>;
