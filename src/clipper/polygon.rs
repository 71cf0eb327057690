//! Closed polygon clipping (Sutherland-Hodgman).
//!
//! The ring is reduced against one boundary half-plane at a time, in
//! [`Boundary::ALL`] order. Each boundary is treated as an infinite line; the
//! three earlier or later passes trim whatever lies beyond the rectangle's
//! other sides. Rectangle corners fall out naturally when two consecutive
//! passes both cut the same region.

use approx::RelativeEq;
use log::{debug, trace};

use crate::edge::{Edge, EPSILON};
use crate::extent::{Boundary, Extent};
use crate::math::Point;

/// Clip a closed polygon to `extent`.
///
/// The ring is implicitly closed from the last vertex back to the first. The
/// input winding order is preserved, and a ring lying entirely inside the
/// rectangle comes back unchanged.
///
/// Returns an empty ring when nothing of the polygon lies inside the
/// rectangle or when the rectangle has zero area. Fewer than three vertices
/// do not make a ring, so such input is always returned empty, even when it
/// lies inside the rectangle.
pub fn clip_polygon(polygon: &[Point], extent: Extent) -> Vec<Point> {
    trace!(
        "clipping polygon of {} vertices to {}x{}",
        polygon.len(),
        extent.width(),
        extent.height()
    );

    if polygon.len() < 3 || extent.is_empty() {
        return Vec::new();
    }

    let mut result = polygon.to_vec();

    for boundary in Boundary::ALL {
        result = clip_against_boundary(&result, extent.boundary(boundary));

        if result.len() < 3 {
            debug!(
                "polygon of {} vertices clipped away at {:?} boundary",
                polygon.len(),
                boundary
            );
            return Vec::new();
        }
    }

    trace!("clipped polygon has {} vertices", result.len());
    result
}

/// One Sutherland-Hodgman pass against the half-plane on the left of
/// `boundary`.
fn clip_against_boundary(vertices: &[Point], boundary: Edge) -> Vec<Point> {
    let mut output = Vec::with_capacity(vertices.len() + 2);

    for (i, &current) in vertices.iter().enumerate() {
        let next = vertices[(i + 1) % vertices.len()];

        let current_inside = boundary.contains(current);
        let next_inside = boundary.contains(next);

        if current_inside {
            output.push(current);
        }

        if current_inside != next_inside {
            let Some(crossing) = Edge::new(current, next).intersection(&boundary) else {
                continue;
            };

            // A vertex lying on the boundary already is the crossing.
            let inside_end = if current_inside { current } else { next };
            if !crossing.relative_eq(&inside_end, EPSILON, EPSILON) {
                output.push(crossing);
            }
        }
    }

    output
}
