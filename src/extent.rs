//! The clip rectangle.
//!
//! An [`Extent`] spans `[0, width] × [0, height]`. Its boundary edges are built
//! counter-clockwise, so the interior is on the left of every directed
//! boundary edge and [`Edge::contains`] is the "inside" test for all four.

use crate::edge::Edge;
use crate::error::{Axis, ExtentError, Result};
use crate::math::Point;

/// One side of the clip rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// x >= 0
    Left,
    /// x <= width
    Right,
    /// y <= height
    Top,
    /// y >= 0
    Bottom,
}

impl Boundary {
    /// All four boundaries, in the order polygon clipping visits them.
    pub const ALL: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Top,
        Boundary::Bottom,
    ];
}

/// A clip rectangle anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    width: f64,
    height: f64,
}

impl Extent {
    /// Creates a new extent.
    ///
    /// # Errors
    /// Returns [`ExtentError`] if either dimension is negative, NaN or
    /// infinite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: validate(Axis::Width, width)?,
            height: validate(Axis::Height, height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns true if the rectangle has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns true if `point` lies in the closed rectangle.
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// The four corners, counter-clockwise from the origin.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::ORIGIN,
            Point::new(self.width, 0.0),
            Point::new(self.width, self.height),
            Point::new(0.0, self.height),
        ]
    }

    /// Returns the directed edge along `boundary`, oriented so the rectangle's
    /// interior is on its left.
    pub fn boundary(&self, boundary: Boundary) -> Edge {
        let [bottom_left, bottom_right, top_right, top_left] = self.corners();
        match boundary {
            Boundary::Bottom => Edge::new(bottom_left, bottom_right),
            Boundary::Right => Edge::new(bottom_right, top_right),
            Boundary::Top => Edge::new(top_right, top_left),
            Boundary::Left => Edge::new(top_left, bottom_left),
        }
    }

    /// All four boundary edges, in [`Boundary::ALL`] order.
    pub fn boundaries(&self) -> [Edge; 4] {
        Boundary::ALL.map(|boundary| self.boundary(boundary))
    }
}

impl TryFrom<(f64, f64)> for Extent {
    type Error = ExtentError;

    fn try_from((width, height): (f64, f64)) -> Result<Self> {
        Self::new(width, height)
    }
}

fn validate(axis: Axis, value: f64) -> Result<f64> {
    if !value.is_finite() {
        Err(ExtentError::NonFinite { axis, value })
    } else if value < 0.0 {
        Err(ExtentError::Negative { axis, value })
    } else {
        Ok(value)
    }
}
