//! Polar kolam - rings, spokes and rippled arcs around a center.
//!
//! Geometry is laid out in (θ, r) and projected to the plane here, so the
//! renderer only ever sees Cartesian points. [`polar_arcs`] exposes the raw
//! polar arcs for callers that plot in polar space themselves.

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{require_at_least, require_positive, KolamError, Result};
use crate::geometry::{linspace, Point, PolarPoint, Polyline};
use crate::pattern::{Pattern, PatternKind, Primitive, Style, DEFAULT_LINE_WIDTH};

/// Samples per guide circle.
pub const CIRCLE_SAMPLES: usize = 400;
/// Samples per ornamental arc.
pub const ARC_SAMPLES: usize = 40;
/// Ripple amplitude as a fraction of `size`.
pub const RIPPLE_AMPLITUDE: f64 = 0.08;
/// Lobes per full turn of the ripple, `sin(5θ)`.
pub const RIPPLE_FREQUENCY: f64 = 5.0;
/// Spokes never drop below this count.
pub const MIN_SPOKES: usize = 6;
/// Spokes added per unit of symmetry.
pub const SPOKES_PER_SYMMETRY: usize = 6;

/// Parameters for [`generate_polar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarParams {
    /// Number of rings; also scales the number of spokes
    pub symmetry: usize,
    /// Outer radius
    pub size: f64,
    pub color: String,
    pub line_width: f64,
}

impl Default for PolarParams {
    fn default() -> Self {
        Self {
            symmetry: 6,
            size: 10.0,
            color: "#1f77b4".to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl PolarParams {
    pub fn style(&self) -> Style {
        Style::new(self.color.clone(), self.line_width)
    }

    pub fn validate(&self) -> Result<()> {
        require_at_least("symmetry", self.symmetry, 1)?;
        require_positive("size", self.size)?;
        require_positive("line_width", self.line_width)?;
        Ok(())
    }
}

/// Number of spokes for a given symmetry.
pub fn spoke_count(symmetry: usize) -> Result<usize> {
    symmetry
        .checked_mul(SPOKES_PER_SYMMETRY)
        .map(|spokes| spokes.max(MIN_SPOKES))
        .ok_or_else(|| KolamError::invalid("symmetry", format!("too large, got {symmetry}")))
}

/// Number of ornament arcs: one per ring per spoke.
fn arc_count(rings: usize, spokes: usize) -> Result<usize> {
    rings.checked_mul(spokes).ok_or_else(|| {
        KolamError::invalid("symmetry", format!("{rings} rings x {spokes} spokes overflows"))
    })
}

/// The rippled arcs in polar form, ring by ring, spoke by spoke.
///
/// Arc `(i, j)` is centered on spoke `j`, spans half a spoke gap either side,
/// and rides at radius `size·(i + 0.5)/rings` plus a `sin(5θ)` ripple.
pub fn polar_arcs(symmetry: usize, size: f64) -> Result<Vec<Vec<PolarPoint>>> {
    require_at_least("symmetry", symmetry, 1)?;
    require_positive("size", size)?;

    let rings = symmetry;
    let spokes = spoke_count(symmetry)?;
    let half_span = PI / spokes as f64;
    let amplitude = RIPPLE_AMPLITUDE * size;

    let mut arcs = Vec::with_capacity(arc_count(rings, spokes)?);
    for i in 0..rings {
        let base = size * (i as f64 + 0.5) / rings as f64;
        for j in 0..spokes {
            let center = 2.0 * PI * j as f64 / spokes as f64;
            let arc = linspace(center - half_span, center + half_span, ARC_SAMPLES)
                .map(|theta| PolarPoint::new(theta, base + amplitude * (RIPPLE_FREQUENCY * theta).sin()))
                .collect();
            arcs.push(arc);
        }
    }

    Ok(arcs)
}

/// Generate a complete polar kolam.
///
/// Primitives: `symmetry` guide circles, then the guide spokes, then
/// `symmetry × spokes` ornament arcs. There is no upper bound on symmetry
/// here; arc count grows as `6·symmetry²`.
pub fn generate_polar(params: &PolarParams) -> Result<Pattern> {
    params.validate()?;

    let rings = params.symmetry;
    let spokes = spoke_count(rings)?;
    let arcs = arc_count(rings, spokes)?;
    let size = params.size;

    let mut primitives = Vec::with_capacity(arcs.saturating_add(rings + spokes));

    for i in 1..=rings {
        let radius = size * i as f64 / rings as f64;
        let circle: Polyline = linspace(0.0, 2.0 * PI, CIRCLE_SAMPLES)
            .map(|theta| PolarPoint::new(theta, radius).to_cartesian())
            .collect();
        primitives.push(Primitive::guide(circle));
    }

    for j in 0..spokes {
        let angle = 2.0 * PI * j as f64 / spokes as f64;
        let tip = PolarPoint::new(angle, size).to_cartesian();
        primitives.push(Primitive::guide(vec![Point::new(0.0, 0.0), tip]));
    }

    for arc in polar_arcs(rings, size)? {
        primitives.push(Primitive::ornament(arc.iter().map(PolarPoint::to_cartesian).collect()));
    }

    debug!(
        "polar symmetry={} size={}: {} rings, {} spokes, {} arcs",
        rings, size, rings, spokes, arcs
    );

    Pattern::new(PatternKind::Polar, params.style(), primitives).ensure_finite()
}
