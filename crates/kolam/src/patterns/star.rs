//! Star kolam - concentric polygon layers sharing one set of vertex angles.
//!
//! The star look comes from stacking regular polygons at evenly stepped
//! radii, not from self-intersecting star polygons.

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{require_at_least, require_positive, Result};
use crate::geometry::{PolarPoint, Polyline};
use crate::pattern::{Pattern, PatternKind, Primitive, Style, DEFAULT_LINE_WIDTH};

/// Parameters for [`generate_star`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarParams {
    /// Vertices per polygon
    pub sides: usize,
    pub layers: usize,
    /// Radius of the outermost layer
    pub size: f64,
    pub color: String,
    pub line_width: f64,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            sides: 6,
            layers: 3,
            size: 5.0,
            color: "#2a9d8f".to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl StarParams {
    pub fn style(&self) -> Style {
        Style::new(self.color.clone(), self.line_width)
    }

    pub fn validate(&self) -> Result<()> {
        require_at_least("sides", self.sides, 3)?;
        require_at_least("layers", self.layers, 1)?;
        require_positive("size", self.size)?;
        require_positive("line_width", self.line_width)?;
        Ok(())
    }
}

/// Generate a star kolam.
///
/// Layer `L` (1-based) has radius `size·L/layers`; the last layer sits at
/// `size`. Every polygon repeats its first vertex, so each stroke has
/// `sides + 1` points.
pub fn generate_star(params: &StarParams) -> Result<Pattern> {
    params.validate()?;

    let sides = params.sides;
    let layers = params.layers;
    let angles: Vec<f64> = (0..sides).map(|k| 2.0 * PI * k as f64 / sides as f64).collect();

    let primitives: Vec<Primitive> = (1..=layers)
        .map(|layer| {
            let r = params.size * layer as f64 / layers as f64;
            let mut polygon: Polyline = angles
                .iter()
                .map(|&theta| PolarPoint::new(theta, r).to_cartesian())
                .collect();
            polygon.push(polygon[0]);
            Primitive::ornament(polygon)
        })
        .collect();

    debug!("star sides={} layers={} size={}", sides, layers, params.size);

    Pattern::new(PatternKind::Star, params.style(), primitives).ensure_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(sides: usize, layers: usize, size: f64) -> StarParams {
        StarParams { sides, layers, size, ..StarParams::default() }
    }

    #[test]
    fn outer_layer_hexagon() {
        let pattern = generate_star(&params(6, 3, 6.0)).unwrap();
        let layers: Vec<_> = pattern.ornaments().collect();
        assert_eq!(layers.len(), 3);

        let outer = layers[2];
        assert_eq!(outer.len(), 7);
        assert_eq!(outer[0], outer[6]);
        for (k, p) in outer[..6].iter().enumerate() {
            assert!((p.radius() - 6.0).abs() < 1e-9);
            let degrees = p.angle().to_degrees().rem_euclid(360.0);
            let expected = 60.0 * k as f64;
            // 0° may come back as 360° - ε after rem_euclid
            let diff = (degrees - expected).abs().min((degrees - expected - 360.0).abs());
            assert!(diff < 1e-9, "vertex {} at {}°, expected {}°", k, degrees, expected);
        }
    }

    #[test]
    fn layers_share_angles_and_step_radius() {
        let pattern = generate_star(&params(5, 4, 8.0)).unwrap();
        let layers: Vec<_> = pattern.ornaments().collect();
        for (i, layer) in layers.iter().enumerate() {
            let expected_r = 8.0 * (i + 1) as f64 / 4.0;
            for (k, p) in layer[..5].iter().enumerate() {
                assert!((p.radius() - expected_r).abs() < 1e-9);
                let outer = layers[3][k];
                assert!((p.angle() - outer.angle()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn triangle_minimum() {
        assert!(generate_star(&params(3, 1, 1.0)).is_ok());
        assert_eq!(generate_star(&params(2, 1, 1.0)).unwrap_err().field(), Some("sides"));
    }

    #[test]
    fn rejects_bad_layers_and_size() {
        assert_eq!(generate_star(&params(6, 0, 5.0)).unwrap_err().field(), Some("layers"));
        assert_eq!(generate_star(&params(6, 3, 0.0)).unwrap_err().field(), Some("size"));
    }

    #[test]
    fn overflowing_size_is_degenerate() {
        let err = generate_star(&params(6, 3, f64::MAX)).unwrap_err();
        assert!(err.to_string().contains("non-finite"));

        // One layer never multiplies past the size itself.
        assert!(generate_star(&params(6, 1, f64::MAX)).is_ok());
    }
}
