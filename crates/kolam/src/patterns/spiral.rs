//! Spiral kolam - a single Archimedean spiral.
//!
//! r = spacing · θ, with θ running from 0 to 2π·turns. The radius is not
//! normalized: more turns or wider spacing simply make a bigger spiral.

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{require_at_least, require_positive, Result};
use crate::geometry::{linspace, Point, PolarPoint, Polyline};
use crate::pattern::{Pattern, PatternKind, Primitive, Style, DEFAULT_LINE_WIDTH};

/// Parameters for [`generate_spiral`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralParams {
    pub turns: f64,
    /// Samples along the whole spiral
    pub point_count: usize,
    /// Radius gained per radian
    pub spacing: f64,
    pub color: String,
    pub line_width: f64,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            turns: 4.0,
            point_count: 500,
            spacing: 0.2,
            color: "#e63946".to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl SpiralParams {
    pub fn style(&self) -> Style {
        Style::new(self.color.clone(), self.line_width)
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("turns", self.turns)?;
        require_at_least("point_count", self.point_count, 2)?;
        require_positive("spacing", self.spacing)?;
        require_positive("line_width", self.line_width)?;
        Ok(())
    }
}

/// Generate a spiral kolam: one open stroke of `point_count` points.
pub fn generate_spiral(params: &SpiralParams) -> Result<Pattern> {
    params.validate()?;

    let max_theta = 2.0 * PI * params.turns;
    let spiral: Polyline = linspace(0.0, max_theta, params.point_count)
        .map(|theta| PolarPoint::new(theta, params.spacing * theta).to_cartesian())
        .collect();

    debug!(
        "spiral turns={} points={} spacing={}: outer radius {:.3}",
        params.turns, params.point_count, params.spacing,
        spiral.last().map_or(0.0, Point::radius)
    );

    Pattern::new(PatternKind::Spiral, params.style(), vec![Primitive::ornament(spiral)]).ensure_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(turns: f64, point_count: usize, spacing: f64) -> SpiralParams {
        SpiralParams { turns, point_count, spacing, ..SpiralParams::default() }
    }

    #[test]
    fn last_radius_matches_turns() {
        let pattern = generate_spiral(&params(2.0, 100, 0.2)).unwrap();
        let strokes: Vec<_> = pattern.ornaments().collect();
        assert_eq!(strokes.len(), 1);

        let spiral = strokes[0];
        assert_eq!(spiral.len(), 100);
        let expected = 0.2 * 2.0 * PI * 2.0;
        assert!((spiral[99].radius() - expected).abs() < 1e-9);
    }

    #[test]
    fn radius_never_decreases() {
        let pattern = generate_spiral(&params(2.0, 100, 0.2)).unwrap();
        let spiral = pattern.ornaments().next().unwrap();
        assert_eq!(spiral[0].radius(), 0.0);
        for w in spiral.windows(2) {
            assert!(w[1].radius() >= w[0].radius() - 1e-12);
        }
    }

    #[test]
    fn fractional_turns() {
        let pattern = generate_spiral(&params(0.5, 3, 1.0)).unwrap();
        let spiral = pattern.ornaments().next().unwrap();
        // θ = 0, π/2, π
        assert!((spiral[1].y - PI / 2.0).abs() < 1e-9);
        assert!((spiral[2].x + PI).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(generate_spiral(&params(0.0, 100, 0.2)).unwrap_err().field(), Some("turns"));
        assert_eq!(generate_spiral(&params(2.0, 1, 0.2)).unwrap_err().field(), Some("point_count"));
        assert_eq!(generate_spiral(&params(2.0, 100, 0.0)).unwrap_err().field(), Some("spacing"));
    }

    #[test]
    fn overflowing_turns_are_degenerate() {
        let err = generate_spiral(&params(1e308, 500, 0.2)).unwrap_err();
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("non-finite"));
    }
}
