pub mod point;

pub use point::Point;

/// Returns the signed area of a closed ring using the shoelace formula.
///
/// Positive for counter-clockwise rings in a y-up frame, negative for
/// clockwise ones. Rings with fewer than three vertices have zero area.
pub fn signed_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| a.cross(*b))
        .sum();

    twice_area / 2.0
}
