//! Clipping against the viewport rectangle.
//!
//! Two algorithms share the [`Edge`](crate::Edge) and [`Extent`](crate::Extent)
//! primitives:
//!
//! - [`path`]: open polylines. A path may leave and re-enter the rectangle,
//!   so one input can produce several disjoint runs.
//! - [`polygon`]: closed rings, clipped with Sutherland-Hodgman. The result is
//!   always a single ring.
//!
//! Both are pure functions over value types and can be called from any number
//! of threads at once.

pub mod path;
pub mod polygon;

pub use path::clip_path;
pub use polygon::clip_polygon;
