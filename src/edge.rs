//! Directed segments and the two geometric queries clipping is built on.
//!
//! Both queries work from the cross product of the edge direction rather than
//! a slope, so horizontal and vertical edges take the same path as any other:
//!
//! - [`Edge::contains`] is a half-plane test against the *infinite* line
//!   through the edge. Polygon clipping uses it with the four rectangle
//!   boundaries.
//! - [`Edge::intersection`] crosses the two supporting lines without checking
//!   either segment's extent. [`Edge::segment_intersection`] adds that check
//!   for callers working with finite segments.

use crate::math::Point;

/// Distance slack used when deciding whether a crossing lies on a finite
/// segment, and relative tolerance when comparing computed points. Absorbs
/// the rounding of the intersection arithmetic at segment endpoints.
pub const EPSILON: f64 = 1e-9;

/// A directed segment from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

impl Edge {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Returns the vector from `from` to `to`.
    pub fn direction(&self) -> Point {
        self.to - self.from
    }

    pub fn length(&self) -> f64 {
        self.direction().magnitude()
    }

    /// Returns true if both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }

    /// Returns the point at parameter `t` along the edge.
    /// `t = 0` is `from`, `t = 1` is `to`.
    pub fn point_at(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    /// Returns the signed orientation of `point` relative to the directed line.
    ///
    /// Positive = left of the line, negative = right, zero = on the line.
    /// The magnitude is twice the area of the triangle (from, to, point).
    pub fn side(&self, point: Point) -> f64 {
        self.direction().cross(point - self.from)
    }

    /// Half-plane test: true if `point` lies on the left of the directed line
    /// or on the line itself.
    ///
    /// Degenerate edges contain every point.
    pub fn contains(&self, point: Point) -> bool {
        self.side(point) >= 0.0
    }

    /// Returns the point where the supporting lines of the two edges cross.
    ///
    /// Returns `None` when the lines are parallel or coincident, or when either
    /// edge has zero length. The crossing is not required to lie on either
    /// segment.
    pub fn intersection(&self, other: &Edge) -> Option<Point> {
        let (t, _) = self.parameters(other)?;
        Some(self.point_at(t))
    }

    /// Returns the crossing of the two finite segments, if they have one.
    ///
    /// Collinear overlapping segments have no single crossing and return `None`.
    pub fn segment_intersection(&self, other: &Edge) -> Option<Point> {
        self.segment_parameter(other).map(|t| self.point_at(t))
    }

    /// Parameter along `self` of the crossing with the finite segment `other`,
    /// clamped to `[0, 1]`.
    pub(crate) fn segment_parameter(&self, other: &Edge) -> Option<f64> {
        let (t, u) = self.parameters(other)?;

        // The slack is a distance, so it must not grow with segment length.
        let on_segment = |v: f64, length: f64| {
            let slack = EPSILON / length;
            (-slack..=1.0 + slack).contains(&v)
        };

        if on_segment(t, self.length()) && on_segment(u, other.length()) {
            Some(t.clamp(0.0, 1.0))
        } else {
            None
        }
    }

    /// Solves `from + t * r = other.from + u * s` for `(t, u)`.
    fn parameters(&self, other: &Edge) -> Option<(f64, f64)> {
        let r = self.direction();
        let s = other.direction();
        let denom = r.cross(s);

        // Parallel when the sine of the angle between the lines vanishes.
        // Zero-length edges fall in here too.
        if denom.abs() <= f64::EPSILON * r.magnitude() * s.magnitude() {
            return None;
        }

        let offset = other.from - self.from;
        let t = offset.cross(s) / denom;
        let u = offset.cross(r) / denom;

        if t.is_finite() && u.is_finite() {
            Some((t, u))
        } else {
            None
        }
    }
}
