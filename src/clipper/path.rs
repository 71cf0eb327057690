//! Open polyline clipping.
//!
//! The path is walked one segment at a time. Each segment is cut down to the
//! parameter range `[t0, t1]` it spends inside the closed rectangle
//! (Liang-Barsky), so `t0` is where it enters and `t1` is where it leaves. The
//! range is solved against the rectangle's four half-planes directly rather
//! than against its boundary segments, so a segment running just outside a
//! side never picks up crossings from the neighbouring sides, and a rectangle
//! of zero width or height still clips.

use approx::RelativeEq;
use log::trace;

use crate::edge::{Edge, EPSILON};
use crate::extent::Extent;
use crate::math::Point;

/// Clip an open polyline to `extent`.
///
/// Returns the runs of the path lying inside the rectangle, in the order they
/// are met when walking the path. Each run begins and ends either at an input
/// vertex or at the point where the path crosses the boundary. A segment
/// passing straight through the rectangle from outside to outside becomes a
/// run of its own.
pub fn clip_path(path: &[Point], extent: Extent) -> Vec<Vec<Point>> {
    trace!(
        "clipping path of {} points to {}x{}",
        path.len(),
        extent.width(),
        extent.height()
    );

    let mut runs = Vec::new();
    let Some(&first) = path.first() else {
        return runs;
    };

    if path.len() == 1 {
        if extent.contains(first) {
            runs.push(vec![first]);
        }
        return runs;
    }

    let mut current = Vec::new();
    if extent.contains(first) {
        current.push(first);
    }

    for pair in path.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let segment = Edge::new(start, end);

        match (extent.contains(start), extent.contains(end)) {
            (true, true) => current.push(end),
            (true, false) => {
                if let Some((_, t1)) = inside_range(&segment, extent) {
                    push_distinct(&mut current, clamp_to(extent, segment.point_at(t1)));
                }
                finish_run(&mut runs, &mut current);
            }
            (false, true) => {
                if let Some((t0, _)) = inside_range(&segment, extent) {
                    push_distinct(&mut current, clamp_to(extent, segment.point_at(t0)));
                }
                push_distinct(&mut current, end);
            }
            (false, false) => {
                if let Some((t0, t1)) = inside_range(&segment, extent) {
                    let entry = clamp_to(extent, segment.point_at(t0));
                    let exit = clamp_to(extent, segment.point_at(t1));
                    // A segment grazing a corner touches the rectangle in a
                    // single point and draws nothing.
                    if !entry.relative_eq(&exit, EPSILON, EPSILON) {
                        runs.push(vec![entry, exit]);
                    }
                }
            }
        }
    }

    finish_run(&mut runs, &mut current);

    trace!("clipped path into {} runs", runs.len());
    runs
}

/// Returns the parameter range `[t0, t1]` of `segment` lying inside the
/// closed rectangle, or `None` if the segment misses it.
///
/// Each side contributes one inequality `t * p <= q`. A segment parallel to a
/// side (`p == 0`) is rejected outright when it lies beyond it.
fn inside_range(segment: &Edge, extent: Extent) -> Option<(f64, f64)> {
    let from = segment.from;
    let d = segment.direction();

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let constraints = [
        (-d.x, from.x),
        (d.x, extent.width() - from.x),
        (-d.y, from.y),
        (d.y, extent.height() - from.y),
    ];

    for (p, q) in constraints {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            // Entering this half-plane.
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            // Leaving it.
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((t0, t1))
}

/// Entry and exit points lie on the boundary, so pulling rounding error back
/// into the rectangle never moves them by more than that error.
fn clamp_to(extent: Extent, point: Point) -> Point {
    Point::new(
        point.x.clamp(0.0, extent.width()),
        point.y.clamp(0.0, extent.height()),
    )
}

fn push_distinct(run: &mut Vec<Point>, point: Point) {
    match run.last() {
        Some(last) if last.relative_eq(&point, EPSILON, EPSILON) => {}
        _ => run.push(point),
    }
}

/// Moves `current` into `runs` if it describes a drawable line.
fn finish_run(runs: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    let run = std::mem::take(current);
    if run.len() >= 2 {
        runs.push(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipper::tests::{assert_points_eq, assert_within, init};

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn extent(width: f64, height: f64) -> Extent {
        Extent::new(width, height).unwrap()
    }

    fn assert_runs_eq(actual: &[Vec<Point>], expected: &[Vec<Point>]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "run count differs: {:?} vs {:?}",
            actual,
            expected
        );
        for (a, e) in actual.iter().zip(expected) {
            assert_points_eq(a, e);
        }
    }

    #[test]
    fn leaves_through_the_top() {
        init();
        let path = points(&[(0.0, 1.0), (1.5, 3.0)]);
        let runs = clip_path(&path, extent(2.0, 2.0));
        assert_runs_eq(&runs, &[points(&[(0.0, 1.0), (0.75, 2.0)])]);
    }

    #[test]
    fn passes_through_from_outside() {
        init();
        let path = points(&[(-3.0, -3.0), (1.5, 3.0)]);
        let runs = clip_path(&path, extent(2.0, 2.0));
        assert_runs_eq(&runs, &[points(&[(0.0, 1.0), (0.75, 2.0)])]);
    }

    #[test]
    fn enters_from_outside() {
        let path = points(&[(1.5, 3.0), (0.0, 1.0), (1.0, 0.5)]);
        let runs = clip_path(&path, extent(2.0, 2.0));
        assert_runs_eq(&runs, &[points(&[(0.75, 2.0), (0.0, 1.0), (1.0, 0.5)])]);
    }

    #[test]
    fn empty_path() {
        assert!(clip_path(&[], extent(2.0, 2.0)).is_empty());
    }

    #[test]
    fn inside_path_is_unchanged() {
        let path = points(&[(0.5, 0.5), (1.0, 1.5), (1.5, 0.25), (2.0, 2.0)]);
        let runs = clip_path(&path, extent(2.0, 2.0));
        assert_runs_eq(&runs, &[path]);
    }

    #[test]
    fn single_point() {
        let bounds = extent(2.0, 2.0);
        assert_runs_eq(
            &clip_path(&points(&[(1.0, 1.0)]), bounds),
            &[points(&[(1.0, 1.0)])],
        );
        assert!(clip_path(&points(&[(3.0, 1.0)]), bounds).is_empty());
    }

    #[test]
    fn outside_path_without_crossings() {
        let path = points(&[(3.0, 3.0), (5.0, 2.5), (4.0, -1.0), (-1.0, -2.0), (-1.0, 5.0)]);
        assert!(clip_path(&path, extent(2.0, 2.0)).is_empty());
    }

    #[test]
    fn zigzag_splits_into_runs() {
        let path = points(&[(0.5, 1.0), (1.0, 3.0), (1.5, 1.0), (2.0, 3.0)]);
        let runs = clip_path(&path, extent(4.0, 2.0));

        assert_runs_eq(
            &runs,
            &[
                points(&[(0.5, 1.0), (0.75, 2.0)]),
                points(&[(1.25, 2.0), (1.5, 1.0), (1.75, 2.0)]),
            ],
        );
    }

    #[test]
    fn traversal_between_runs_is_its_own_run() {
        let path = points(&[
            (1.0, 1.0),
            (5.0, 1.0),
            (5.0, 1.75),
            (-1.0, 1.75),
            (-1.0, 0.5),
            (3.0, 0.5),
        ]);
        let runs = clip_path(&path, extent(4.0, 2.0));

        assert_runs_eq(
            &runs,
            &[
                points(&[(1.0, 1.0), (4.0, 1.0)]),
                points(&[(4.0, 1.75), (0.0, 1.75)]),
                points(&[(0.0, 0.5), (3.0, 0.5)]),
            ],
        );
    }

    #[test]
    fn segment_along_a_boundary_line() {
        let path = points(&[(-1.0, 0.0), (3.0, 0.0)]);
        let runs = clip_path(&path, extent(2.0, 2.0));
        assert_runs_eq(&runs, &[points(&[(0.0, 0.0), (2.0, 0.0)])]);
    }

    #[test]
    fn grazing_a_corner_draws_nothing() {
        let path = points(&[(-1.0, 1.0), (1.0, -1.0)]);
        assert!(clip_path(&path, extent(2.0, 2.0)).is_empty());
    }

    #[test]
    fn leaving_from_the_boundary() {
        let path = points(&[(1.0, 1.0), (0.0, 1.0), (-1.0, 1.0)]);
        let runs = clip_path(&path, extent(2.0, 2.0));
        assert_runs_eq(&runs, &[points(&[(1.0, 1.0), (0.0, 1.0)])]);
    }

    #[test]
    fn vertical_segments_through_the_rectangle() {
        let path = points(&[(1.0, -5.0), (1.0, 5.0), (1.5, 5.0), (1.5, 1.0)]);
        let runs = clip_path(&path, extent(2.0, 2.0));

        assert_runs_eq(
            &runs,
            &[
                points(&[(1.0, 0.0), (1.0, 2.0)]),
                points(&[(1.5, 2.0), (1.5, 1.0)]),
            ],
        );
    }

    #[test]
    fn every_point_lies_inside() {
        let bounds = extent(3.0, 2.0);
        let path: Vec<Point> = (0..40)
            .map(|i| {
                let t = f64::from(i) * 0.37;
                Point::new(1.5 + 2.5 * t.cos(), 1.0 + 1.8 * (1.7 * t).sin())
            })
            .collect();

        let runs = clip_path(&path, bounds);
        assert!(!runs.is_empty());
        for run in &runs {
            assert!(run.len() >= 2);
            assert_within(run, bounds);
        }
    }

    #[test]
    fn near_misses_at_viewport_scale_draw_nothing() {
        let viewport = extent(800.0, 600.0);
        let just_outside = [
            points(&[(-5e-7, -1.0), (-5e-7, 601.0)]),
            points(&[(800.000_000_5, -1.0), (800.000_000_5, 601.0)]),
            points(&[(-1.0, -5e-7), (801.0, -5e-7)]),
            points(&[(-1.0, 600.000_000_5), (801.0, 600.000_000_5)]),
        ];

        for path in &just_outside {
            assert!(clip_path(path, viewport).is_empty(), "{:?}", path);
        }

        let huge = extent(1e6, 1e6);
        let path = points(&[(-5e-4, -1.0), (-5e-4, 1e6 + 1.0)]);
        assert!(clip_path(&path, huge).is_empty());
    }

    #[test]
    fn diagonal_through_opposite_corners_of_the_viewport() {
        let path = points(&[(-100.0, -75.0), (900.0, 675.0)]);
        let runs = clip_path(&path, extent(800.0, 600.0));
        assert_runs_eq(&runs, &[points(&[(0.0, 0.0), (800.0, 600.0)])]);
    }

    #[test]
    fn series_at_viewport_scale_stays_inside() {
        let viewport = extent(800.0, 600.0);
        let path: Vec<Point> = (0..1_000)
            .map(|i| {
                let t = f64::from(i) / 1_000.0;
                Point::new(-400.0 + t * 1_600.0, 300.0 + 420.0 * (t * 40.0).sin())
            })
            .collect();

        let runs = clip_path(&path, viewport);
        assert!(!runs.is_empty());
        for run in &runs {
            assert!(run.len() >= 2);
            assert_within(run, viewport);
        }
    }

    #[test]
    fn zero_width_extent_keeps_the_overlap() {
        let line = extent(0.0, 5.0);

        let runs = clip_path(&points(&[(0.0, -1.0), (0.0, 3.0)]), line);
        assert_runs_eq(&runs, &[points(&[(0.0, 0.0), (0.0, 3.0)])]);

        let runs = clip_path(&points(&[(0.0, -1.0), (0.0, 7.0)]), line);
        assert_runs_eq(&runs, &[points(&[(0.0, 0.0), (0.0, 5.0)])]);

        // Crossing the degenerate rectangle only touches it.
        assert!(clip_path(&points(&[(-1.0, 2.0), (1.0, 2.0)]), line).is_empty());
    }
}
