//! Viewport clipping for 2D plots.
//!
//! This crate cuts plot-space geometry down to an axis-aligned rectangle
//! anchored at the origin, so a renderer can stroke or fill the result
//! without drawing past the canvas bounds.
//!
//! # Quick Start
//!
//! ```
//! use plotclip::prelude::*;
//!
//! let extent = Extent::new(2.0, 2.0)?;
//!
//! // Strokes stay open and may split into several runs.
//! let runs = clip_path(&[Point::new(0.0, 1.0), Point::new(1.5, 3.0)], extent);
//! assert_eq!(runs.len(), 1);
//!
//! // Fills stay a single closed ring.
//! let ring = clip_polygon(
//!     &[Point::new(0.0, 1.0), Point::new(1.5, 3.0), Point::new(2.0, 0.5)],
//!     extent,
//! );
//! assert_eq!(ring.len(), 4);
//! # Ok::<(), plotclip::ExtentError>(())
//! ```

pub mod edge;
pub mod extent;
pub mod math;

pub(crate) mod clipper;
mod error;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{clip_path, clip_polygon};
pub use edge::Edge;
pub use error::{Axis, ExtentError, Result};
pub use extent::{Boundary, Extent};
pub use math::{signed_area, Point};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use plotclip::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::edge::Edge;
    pub use crate::extent::{Boundary, Extent};
    pub use crate::math::Point;

    // Clipping
    pub use crate::clipper::{clip_path, clip_polygon};

    // Errors
    pub use crate::error::ExtentError;
}
