//! Flower kolam - rotated petal curves.
//!
//! Each petal is the curve
//!   x = R·cos(θ + φ)·sin θ
//!   y = R·sin(θ + φ)·sin θ
//! for θ in [0, 2π], which is the polar curve r = R·sin θ turned by φ.
//! It traces a loop through the origin twice over the full range.
//! Spreading φ evenly over the petals gives the rotational symmetry.

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{require_at_least, require_positive, Result};
use crate::geometry::{linspace, Point};
use crate::pattern::{Pattern, PatternKind, Primitive, Style, DEFAULT_LINE_WIDTH};

/// Samples per petal curve.
pub const PETAL_SAMPLES: usize = 200;

/// Parameters for [`generate_flower`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerParams {
    pub petals: usize,
    pub radius: f64,
    pub color: String,
    pub line_width: f64,
}

impl Default for FlowerParams {
    fn default() -> Self {
        Self {
            petals: 8,
            radius: 5.0,
            color: "#d6336c".to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl FlowerParams {
    pub fn style(&self) -> Style {
        Style::new(self.color.clone(), self.line_width)
    }

    pub fn validate(&self) -> Result<()> {
        require_at_least("petals", self.petals, 1)?;
        require_positive("radius", self.radius)?;
        require_positive("line_width", self.line_width)?;
        Ok(())
    }
}

/// Generate a flower kolam: one open ornament stroke per petal.
pub fn generate_flower(params: &FlowerParams) -> Result<Pattern> {
    params.validate()?;

    let radius = params.radius;
    let primitives: Vec<Primitive> = (0..params.petals)
        .map(|i| {
            let rotation = 2.0 * PI * i as f64 / params.petals as f64;
            let petal = linspace(0.0, 2.0 * PI, PETAL_SAMPLES)
                .map(|theta| {
                    Point::new(
                        radius * (theta + rotation).cos() * theta.sin(),
                        radius * (theta + rotation).sin() * theta.sin(),
                    )
                })
                .collect();
            Primitive::ornament(petal)
        })
        .collect();

    debug!("flower petals={} radius={}: {} strokes", params.petals, radius, primitives.len());

    Pattern::new(PatternKind::Flower, params.style(), primitives).ensure_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(petals: usize, radius: f64) -> FlowerParams {
        FlowerParams { petals, radius, ..FlowerParams::default() }
    }

    #[test]
    fn one_stroke_per_petal() {
        let pattern = generate_flower(&params(8, 5.0)).unwrap();
        let petals: Vec<_> = pattern.ornaments().collect();
        assert_eq!(petals.len(), 8);
        assert!(petals.iter().all(|p| p.len() == PETAL_SAMPLES));
        assert!(pattern.strokes().all(|(_, _, closed)| !closed));
    }

    #[test]
    fn petals_pass_through_origin_and_stay_in_radius() {
        let pattern = generate_flower(&params(5, 4.0)).unwrap();
        for petal in pattern.ornaments() {
            assert!(petal[0].radius() < 1e-12);
            for p in petal {
                assert!(p.radius() <= 4.0 + 1e-9);
            }
        }
    }

    #[test]
    fn petals_are_rotated_copies() {
        let petals = 4;
        let pattern = generate_flower(&params(petals, 3.0)).unwrap();
        let strokes: Vec<_> = pattern.ornaments().collect();
        let step = 2.0 * PI / petals as f64;
        // Sample k of petal 1 equals sample k of petal 0 turned by one step.
        for k in [10, 50, 120] {
            let a = strokes[0][k];
            let b = strokes[1][k];
            let rx = a.x * step.cos() - a.y * step.sin();
            let ry = a.x * step.sin() + a.y * step.cos();
            assert!((rx - b.x).abs() < 1e-9 && (ry - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn single_petal_is_allowed() {
        assert_eq!(generate_flower(&params(1, 2.0)).unwrap().ornaments().count(), 1);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(generate_flower(&params(0, 5.0)).unwrap_err().field(), Some("petals"));
        assert_eq!(generate_flower(&params(3, -1.0)).unwrap_err().field(), Some("radius"));
    }

    #[test]
    fn huge_radius_stays_finite() {
        let pattern = generate_flower(&params(6, f64::MAX)).unwrap();
        assert!(pattern.ornaments().flatten().all(|p| p.is_finite()));
    }
}
