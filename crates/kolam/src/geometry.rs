//! Core geometry types for kolam.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = small values are copied implicitly, like numbers
//! - `PartialEq` = can compare with `==`
//! - `Serialize` = serde can turn it into JSON/YAML
//!
//! Every point the engine produces is a plain value. Nothing here has
//! identity or interior mutability.

use serde::{Deserialize, Serialize};

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A point in polar form: angle `theta` (radians) and radius `r`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub theta: f64,
    pub r: f64,
}

/// An ordered sequence of points.
///
/// Closed shapes built by the generators repeat their first point at the end.
pub type Polyline = Vec<Point>;

/// Axis-aligned bounds as (min_x, min_y, max_x, max_y).
pub type Bounds = (f64, f64, f64, f64);

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear blend: `self * (1 - t) + other * t`.
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
        )
    }

    /// Midpoint between two points.
    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Translate by (dx, dy).
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Distance from the origin.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Both coordinates are finite (no overflow, no NaN).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Angle from the positive x axis, in radians (-π, π].
    #[cfg(test)]
    pub(crate) fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl PolarPoint {
    #[inline]
    pub fn new(theta: f64, r: f64) -> Self {
        Self { theta, r }
    }

    /// Project onto the plane: `x = r·cosθ`, `y = r·sinθ`.
    #[inline]
    pub fn to_cartesian(&self) -> Point {
        Point::new(self.r * self.theta.cos(), self.r * self.theta.sin())
    }
}

impl From<PolarPoint> for Point {
    fn from(p: PolarPoint) -> Self {
        p.to_cartesian()
    }
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// With `n == 1` the single sample is `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| {
        // Pin the last sample so the range end is hit exactly.
        if n > 1 && i == n - 1 { end } else { start + step * i as f64 }
    })
}

/// Bounding box of a point sequence, `None` when empty.
///
/// The iterator folds compile down to a plain loop.
pub fn bounding_box_of_points(points: &[Point]) -> Option<Bounds> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

/// Merge two bounding boxes.
pub fn union_bounds(a: Bounds, b: Bounds) -> Bounds {
    (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn lerp_quarter() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 8.0);
        assert_eq!(a.lerp(b, 0.25), Point::new(1.0, 2.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn polar_projection() {
        let p = PolarPoint::new(PI / 2.0, 2.0).to_cartesian();
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);

        let q: Point = PolarPoint::new(0.0, 3.0).into();
        assert_eq!(q, Point::new(3.0, 0.0));
    }

    #[test]
    fn linspace_hits_both_ends() {
        let samples: Vec<f64> = linspace(0.0, 2.0 * PI, 200).collect();
        assert_eq!(samples.len(), 200);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[199], 2.0 * PI);
        assert!(samples.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_single_sample() {
        let samples: Vec<f64> = linspace(1.5, 9.0, 1).collect();
        assert_eq!(samples, vec![1.5]);
    }

    #[test]
    fn bbox_of_points() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, -2.0),
            Point::new(4.0, 5.0),
        ];
        assert_eq!(bounding_box_of_points(&pts), Some((0.0, -2.0, 10.0, 5.0)));
        assert_eq!(bounding_box_of_points(&[]), None);
    }

    #[test]
    fn bounds_union() {
        let merged = union_bounds((0.0, 0.0, 1.0, 1.0), (-1.0, 0.5, 0.5, 3.0));
        assert_eq!(merged, (-1.0, 0.0, 1.0, 3.0));
    }

    #[test]
    fn overflow_is_not_finite() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f64::MAX * 2.0, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY * 0.0).is_finite());
    }
}
