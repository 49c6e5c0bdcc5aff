//! Chaikin corner-cutting over closed polylines.
//!
//! Each pass replaces every edge (p0, p1) with two points a quarter of the
//! way in from each end. Corners get shaved off, the curve never leaves the
//! convex hull of its input, and the point count doubles.

use crate::error::{KolamError, Result};
use crate::geometry::{Point, Polyline};

/// Minimum number of points a closed polyline needs to be smoothed.
pub const MIN_SMOOTH_POINTS: usize = 3;

/// Smooth a closed polyline with `iterations` Chaikin passes.
///
/// The input is treated as cyclic: the last point pairs with the first. It
/// does not need to repeat its first point, and if it does the repeated pair
/// simply contributes a zero-length edge.
///
/// `iterations == 0` returns the input unchanged.
pub fn smooth(polyline: &[Point], iterations: usize) -> Result<Polyline> {
    if polyline.len() < MIN_SMOOTH_POINTS {
        return Err(KolamError::DegenerateGeometry(format!(
            "smoothing needs at least {} points, got {}",
            MIN_SMOOTH_POINTS,
            polyline.len()
        )));
    }

    let mut points = polyline.to_vec();
    for _ in 0..iterations {
        points = chaikin_pass(&points);
    }
    Ok(points)
}

fn chaikin_pass(points: &[Point]) -> Polyline {
    let n = points.len();
    let mut out = Vec::with_capacity(n * 2);

    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        out.push(p0.lerp(p1, 0.25));
        out.push(p0.lerp(p1, 0.75));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bounding_box_of_points;

    fn square() -> Polyline {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ]
    }

    #[test]
    fn zero_iterations_is_identity() {
        let sq = square();
        assert_eq!(smooth(&sq, 0).unwrap(), sq);
    }

    #[test]
    fn point_count_doubles_each_pass() {
        let sq = square();
        for k in 0..6 {
            let out = smooth(&sq, k).unwrap();
            assert_eq!(out.len(), sq.len() * (1 << k));
        }
    }

    #[test]
    fn first_pass_cuts_corners_at_quarters() {
        let out = smooth(&square(), 1).unwrap();
        assert_eq!(out[0], Point::new(1.0, 0.0));
        assert_eq!(out[1], Point::new(3.0, 0.0));
        assert_eq!(out[2], Point::new(4.0, 1.0));
        // Wrap-around edge: last point back to the first.
        assert_eq!(out[6], Point::new(0.0, 3.0));
        assert_eq!(out[7], Point::new(0.0, 1.0));
    }

    #[test]
    fn stays_inside_input_bounds() {
        let zigzag = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 9.0),
            Point::new(7.0, -3.0),
            Point::new(12.0, 4.0),
            Point::new(2.0, 6.0),
        ];
        let (min_x, min_y, max_x, max_y) = bounding_box_of_points(&zigzag).unwrap();
        let out = smooth(&zigzag, 4).unwrap();
        for p in &out {
            assert!(p.x >= min_x && p.x <= max_x, "x out of bounds: {:?}", p);
            assert!(p.y >= min_y && p.y <= max_y, "y out of bounds: {:?}", p);
        }
    }

    #[test]
    fn stays_inside_convex_hull_of_square() {
        // For a convex input the hull is the input itself: every smoothed
        // point must satisfy all four half-planes of the square.
        let out = smooth(&square(), 3).unwrap();
        for p in &out {
            assert!(p.x >= 0.0 && p.x <= 4.0 && p.y >= 0.0 && p.y <= 4.0);
        }
    }

    #[test]
    fn closed_loop_with_repeated_point() {
        let mut loop_pts = square();
        loop_pts.push(loop_pts[0]);
        let out = smooth(&loop_pts, 2).unwrap();
        assert_eq!(out.len(), 5 * 4);
    }

    #[test]
    fn rejects_fewer_than_three_points() {
        let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        match smooth(&two, 1) {
            Err(KolamError::DegenerateGeometry(msg)) => assert!(msg.contains("got 2")),
            other => panic!("expected DegenerateGeometry, got {:?}", other),
        }
        assert!(smooth(&[], 0).is_err());
    }

    #[test]
    fn deterministic() {
        let a = smooth(&square(), 5).unwrap();
        let b = smooth(&square(), 5).unwrap();
        assert_eq!(a, b);
    }
}
