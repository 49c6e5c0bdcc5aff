//! Pattern generators.
//!
//! Each generator is a free function from its parameter struct to a
//! [`Pattern`]. [`PatternSpec`] ties a kind to its parameters so callers can
//! carry "which pattern, with what settings" around as one value.

pub mod flower;
pub mod grid;
pub mod polar;
pub mod spiral;
pub mod star;

pub use flower::{generate_flower, FlowerParams};
pub use grid::{build_grid, build_loops, generate_grid, GridParams, LOOP_MARGIN};
pub use polar::{generate_polar, polar_arcs, PolarParams};
pub use spiral::{generate_spiral, SpiralParams};
pub use star::{generate_star, StarParams};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::limits;
use crate::pattern::{Pattern, PatternKind, Style};

/// A pattern kind together with its parameters.
///
/// Serializes with a `kind` tag:
/// ```text
/// kind: star
/// sides: 8
/// layers: 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PatternSpec {
    Grid(GridParams),
    Polar(PolarParams),
    Flower(FlowerParams),
    Star(StarParams),
    Spiral(SpiralParams),
}

impl PatternSpec {
    /// Default parameters for a kind.
    pub fn default_for(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Grid => PatternSpec::Grid(GridParams::default()),
            PatternKind::Polar => PatternSpec::Polar(PolarParams::default()),
            PatternKind::Flower => PatternSpec::Flower(FlowerParams::default()),
            PatternKind::Star => PatternSpec::Star(StarParams::default()),
            PatternKind::Spiral => PatternSpec::Spiral(SpiralParams::default()),
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            PatternSpec::Grid(_) => PatternKind::Grid,
            PatternSpec::Polar(_) => PatternKind::Polar,
            PatternSpec::Flower(_) => PatternKind::Flower,
            PatternSpec::Star(_) => PatternKind::Star,
            PatternSpec::Spiral(_) => PatternKind::Spiral,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            PatternSpec::Grid(p) => p.style(),
            PatternSpec::Polar(p) => p.style(),
            PatternSpec::Flower(p) => p.style(),
            PatternSpec::Star(p) => p.style(),
            PatternSpec::Spiral(p) => p.style(),
        }
    }

    /// Replace the style fields without touching geometry parameters.
    pub fn set_style(&mut self, style: Style) {
        let (color, line_width) = match self {
            PatternSpec::Grid(p) => (&mut p.color, &mut p.line_width),
            PatternSpec::Polar(p) => (&mut p.color, &mut p.line_width),
            PatternSpec::Flower(p) => (&mut p.color, &mut p.line_width),
            PatternSpec::Star(p) => (&mut p.color, &mut p.line_width),
            PatternSpec::Spiral(p) => (&mut p.color, &mut p.line_width),
        };
        *color = style.color;
        *line_width = style.line_width;
    }

    /// Check parameters against the interactive ranges in [`limits`].
    ///
    /// Stricter than the generators' own domain checks. Front ends call this
    /// before generating; library users who want the full domain skip it.
    pub fn check_ranges(&self) -> Result<()> {
        limits::LINE_WIDTH.check("line_width", self.style().line_width)?;
        match self {
            PatternSpec::Grid(p) => {
                limits::GRID_ROWS.check("rows", p.rows)?;
                limits::GRID_COLS.check("cols", p.cols)?;
                limits::GRID_SPACING.check("spacing", p.spacing)?;
                limits::GRID_SMOOTH_ITERATIONS.check("smooth_iterations", p.smooth_iterations)?;
            }
            PatternSpec::Polar(p) => {
                limits::POLAR_SYMMETRY.check("symmetry", p.symmetry)?;
                limits::POLAR_SIZE.check("size", p.size)?;
            }
            PatternSpec::Flower(p) => {
                limits::FLOWER_PETALS.check("petals", p.petals)?;
                limits::FLOWER_RADIUS.check("radius", p.radius)?;
            }
            PatternSpec::Star(p) => {
                limits::STAR_SIDES.check("sides", p.sides)?;
                limits::STAR_LAYERS.check("layers", p.layers)?;
                limits::STAR_SIZE.check("size", p.size)?;
            }
            PatternSpec::Spiral(p) => {
                limits::SPIRAL_TURNS.check("turns", p.turns)?;
                limits::SPIRAL_POINTS.check("point_count", p.point_count)?;
                limits::SPIRAL_SPACING.check("spacing", p.spacing)?;
            }
        }
        Ok(())
    }

    /// Run the matching generator.
    pub fn generate(&self) -> Result<Pattern> {
        match self {
            PatternSpec::Grid(p) => generate_grid(p),
            PatternSpec::Polar(p) => generate_polar(p),
            PatternSpec::Flower(p) => generate_flower(p),
            PatternSpec::Star(p) => generate_star(p),
            PatternSpec::Spiral(p) => generate_spiral(p),
        }
    }
}
