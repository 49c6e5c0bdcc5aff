//! The value every generator returns.
//!
//! A `Pattern` is geometry plus a style hint. Geometry code never looks at the
//! style, so a pattern can be restyled with [`Pattern::with_style`] without
//! recomputing a single point.

use serde::{Deserialize, Serialize};

use crate::error::{KolamError, Result};
use crate::geometry::{bounding_box_of_points, union_bounds, Bounds, Point, Polyline};

/// Default stroke width used by every generator.
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;

/// Color used for guide strokes and anchor dots.
pub const GUIDE_COLOR: &str = "#000000";

/// Stroke width used for guide strokes.
pub const GUIDE_LINE_WIDTH: f64 = 0.6;

/// Rendering hints attached to a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Any color string the renderer understands (`#rrggbb`, `purple`, ...)
    pub color: String,
    /// Stroke width in points
    pub line_width: f64,
}

impl Style {
    pub fn new(color: impl Into<String>, line_width: f64) -> Self {
        Self { color: color.into(), line_width }
    }

    /// The fixed thin black style guides are drawn with.
    pub fn guide() -> Self {
        Self::new(GUIDE_COLOR, GUIDE_LINE_WIDTH)
    }
}

/// What a stroke is for, so the renderer can pick its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeRole {
    /// The decorative line art; drawn with the pattern style.
    Ornament,
    /// Structural scaffolding (rings, spokes); drawn with [`Style::guide`].
    Guide,
}

/// A drawable piece of a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    /// Connected line segments through `points`.
    Stroke {
        role: StrokeRole,
        points: Polyline,
        /// Join the last point back to the first when drawing.
        closed: bool,
    },
    /// Discrete anchor markers.
    Dots { points: Vec<Point> },
}

impl Primitive {
    pub fn ornament(points: Polyline) -> Self {
        Primitive::Stroke { role: StrokeRole::Ornament, points, closed: false }
    }

    pub fn closed_ornament(points: Polyline) -> Self {
        Primitive::Stroke { role: StrokeRole::Ornament, points, closed: true }
    }

    pub fn guide(points: Polyline) -> Self {
        Primitive::Stroke { role: StrokeRole::Guide, points, closed: false }
    }

    pub fn points(&self) -> &[Point] {
        match self {
            Primitive::Stroke { points, .. } | Primitive::Dots { points } => points,
        }
    }
}

/// Available pattern kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Grid,
    Polar,
    Flower,
    Star,
    Spiral,
}

impl PatternKind {
    /// Get all available kinds.
    pub fn all() -> &'static [PatternKind] {
        &[
            PatternKind::Grid,
            PatternKind::Polar,
            PatternKind::Flower,
            PatternKind::Star,
            PatternKind::Spiral,
        ]
    }

    /// Get kind name as string.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Grid => "grid",
            PatternKind::Polar => "polar",
            PatternKind::Flower => "flower",
            PatternKind::Star => "star",
            PatternKind::Spiral => "spiral",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            PatternKind::Grid => "Grid Kolam",
            PatternKind::Polar => "Polar Kolam",
            PatternKind::Flower => "Flower Kolam",
            PatternKind::Star => "Star Kolam",
            PatternKind::Spiral => "Spiral Kolam",
        }
    }

    /// Brief description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            PatternKind::Grid => "Rounded loops around each cell of a dot grid",
            PatternKind::Polar => "Rings, spokes and rippled arcs with radial symmetry",
            PatternKind::Flower => "Rotated petal curves through the center",
            PatternKind::Star => "Concentric co-angled polygon layers",
            PatternKind::Spiral => "Single continuous Archimedean spiral",
        }
    }

    /// Parse kind from string.
    pub fn from_name(name: &str) -> Option<PatternKind> {
        match name.to_lowercase().as_str() {
            "grid" | "dots" | "pulli" => Some(PatternKind::Grid),
            "polar" | "radial" => Some(PatternKind::Polar),
            "flower" | "petal" | "petals" => Some(PatternKind::Flower),
            "star" | "polygon" => Some(PatternKind::Star),
            "spiral" => Some(PatternKind::Spiral),
            _ => None,
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated pattern: primitives in draw order plus a style hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub style: Style,
    pub primitives: Vec<Primitive>,
}

impl Pattern {
    pub fn new(kind: PatternKind, style: Style, primitives: Vec<Primitive>) -> Self {
        Self { kind, style, primitives }
    }

    /// Reject a pattern whose coordinates overflowed to inf or NaN.
    ///
    /// Parameters can each be finite and in domain yet still multiply past
    /// `f64::MAX`; generators call this last so such input is an error
    /// rather than garbage points.
    pub(crate) fn ensure_finite(self) -> Result<Self> {
        let bad = self
            .primitives
            .iter()
            .flat_map(|prim| prim.points())
            .filter(|p| !p.is_finite())
            .count();
        if bad > 0 {
            return Err(KolamError::DegenerateGeometry(format!(
                "{} pattern has {} non-finite points; parameters are too large",
                self.kind, bad
            )));
        }
        Ok(self)
    }

    /// Same geometry, different style.
    pub fn with_style(&self, style: Style) -> Self {
        Self { kind: self.kind, style, primitives: self.primitives.clone() }
    }

    /// Iterate stroke primitives as (role, points, closed).
    pub fn strokes(&self) -> impl Iterator<Item = (StrokeRole, &[Point], bool)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Stroke { role, points, closed } => Some((*role, points.as_slice(), *closed)),
            Primitive::Dots { .. } => None,
        })
    }

    /// Ornament strokes only.
    pub fn ornaments(&self) -> impl Iterator<Item = &[Point]> {
        self.strokes()
            .filter(|(role, _, _)| *role == StrokeRole::Ornament)
            .map(|(_, points, _)| points)
    }

    /// Guide strokes only.
    pub fn guides(&self) -> impl Iterator<Item = &[Point]> {
        self.strokes()
            .filter(|(role, _, _)| *role == StrokeRole::Guide)
            .map(|(_, points, _)| points)
    }

    /// All anchor dots, across every `Dots` primitive.
    pub fn dots(&self) -> impl Iterator<Item = &Point> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Dots { points } => Some(points.iter()),
                Primitive::Stroke { .. } => None,
            })
            .flatten()
    }

    /// Total number of points across all primitives.
    pub fn point_count(&self) -> usize {
        self.primitives.iter().map(|p| p.points().len()).sum()
    }

    /// Bounds of everything drawn, `None` for an empty pattern.
    pub fn bounding_box(&self) -> Option<Bounds> {
        self.primitives
            .iter()
            .filter_map(|p| bounding_box_of_points(p.points()))
            .reduce(union_bounds)
    }
}
