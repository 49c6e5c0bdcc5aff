//! Grid kolam - rounded loops around the cells of a dot grid.
//!
//! Three layers, each usable on its own:
//! - [`build_grid`] lays out the anchor dots
//! - [`build_loops`] puts one puffed-out diamond in every 2×2 cell
//! - [`generate_grid`] smooths the loops and assembles the pattern
//!
//! Rows grow downward (negative y) so row 0 is the top of the drawing.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{require_at_least, require_non_negative, require_positive, Result};
use crate::geometry::{Point, Polyline};
use crate::pattern::{Pattern, PatternKind, Primitive, Style, DEFAULT_LINE_WIDTH};
use crate::smooth::smooth;

/// How far each loop's edge midpoints are pushed out of the cell.
///
/// Controls loop roundness; 0 gives a diamond inscribed in the cell.
pub const LOOP_MARGIN: f64 = 0.18;

/// Parameters for [`generate_grid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f64,
    /// Shift odd rows of dots half a spacing to the right
    pub row_offset: bool,
    /// Include the anchor dots in the pattern
    pub show_dots: bool,
    /// Chaikin passes applied to every loop
    pub smooth_iterations: usize,
    pub margin: f64,
    pub color: String,
    pub line_width: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            spacing: 1.0,
            row_offset: true,
            show_dots: true,
            smooth_iterations: 3,
            margin: LOOP_MARGIN,
            color: "#000000".to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl GridParams {
    pub fn style(&self) -> Style {
        Style::new(self.color.clone(), self.line_width)
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<()> {
        require_at_least("rows", self.rows, 1)?;
        require_at_least("cols", self.cols, 1)?;
        require_positive("spacing", self.spacing)?;
        require_non_negative("margin", self.margin)?;
        require_positive("line_width", self.line_width)?;
        Ok(())
    }
}

/// Lay out `rows × cols` anchor dots in row-major order.
///
/// Dot `(r, c)` sits at index `r * cols + c`, at
/// `x = c·spacing (+ spacing/2 on odd rows when offset)`, `y = -r·spacing`.
pub fn build_grid(rows: usize, cols: usize, spacing: f64, row_offset: bool) -> Result<Vec<Point>> {
    require_at_least("rows", rows, 1)?;
    require_at_least("cols", cols, 1)?;
    require_positive("spacing", spacing)?;

    let mut points = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let shift = if row_offset && r % 2 == 1 { spacing / 2.0 } else { 0.0 };
        for c in 0..cols {
            points.push(Point::new(c as f64 * spacing + shift, -(r as f64) * spacing));
        }
    }

    Ok(points)
}

/// Build one closed loop per unit cell, in row-major cell order.
///
/// Each loop visits the top, right, bottom and left edge midpoints of its
/// cell, each pushed outward by `margin`, and repeats the top point to close.
/// A grid with a single row or column has no cells and yields no loops.
pub fn build_loops(rows: usize, cols: usize, spacing: f64, margin: f64) -> Result<Vec<Polyline>> {
    require_at_least("rows", rows, 1)?;
    require_at_least("cols", cols, 1)?;
    require_positive("spacing", spacing)?;
    require_non_negative("margin", margin)?;

    let mut loops = Vec::with_capacity((rows - 1) * (cols - 1));
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            loops.push(cell_loop(r, c, spacing, margin));
        }
    }

    Ok(loops)
}

fn cell_loop(r: usize, c: usize, spacing: f64, margin: f64) -> Polyline {
    let left = c as f64 * spacing;
    let right = (c + 1) as f64 * spacing;
    let top = -(r as f64) * spacing;
    let bottom = -((r + 1) as f64) * spacing;

    // Corners clockwise from top-left.
    let p1 = Point::new(left, top);
    let p2 = Point::new(right, top);
    let p3 = Point::new(right, bottom);
    let p4 = Point::new(left, bottom);

    let m_top = p1.midpoint(p2).offset(0.0, margin);
    let m_right = p2.midpoint(p3).offset(margin, 0.0);
    let m_bottom = p3.midpoint(p4).offset(0.0, -margin);
    let m_left = p4.midpoint(p1).offset(-margin, 0.0);

    vec![m_top, m_right, m_bottom, m_left, m_top]
}

/// Generate a complete grid kolam.
///
/// Primitives come out as the dots (if shown) followed by one stroke per
/// cell. A loop that fails to smooth is logged and left out; the rest of the
/// pattern is still returned.
pub fn generate_grid(params: &GridParams) -> Result<Pattern> {
    params.validate()?;

    let dots = build_grid(params.rows, params.cols, params.spacing, params.row_offset)?;
    let loops = build_loops(params.rows, params.cols, params.spacing, params.margin)?;
    let loop_count = loops.len();

    let mut primitives = Vec::with_capacity(loop_count + 1);
    if params.show_dots {
        primitives.push(Primitive::Dots { points: dots });
    }

    let iterations = params.smooth_iterations;
    let strokes = assemble_loops(loops, iterations, |raw| smooth(raw, iterations));
    let skipped = loop_count - strokes.len();
    primitives.extend(strokes);

    debug!(
        "grid {}x{} spacing={} offset={} smooth={}: {} loops ({} skipped)",
        params.rows, params.cols, params.spacing, params.row_offset, iterations,
        loop_count - skipped, skipped
    );

    Pattern::new(PatternKind::Grid, params.style(), primitives).ensure_finite()
}

/// Turn raw loops into stroke primitives, isolating per-loop failures.
///
/// With zero iterations the raw loop (which already repeats its first point)
/// is drawn as is. Otherwise `smoother` runs on every loop; its output is a
/// cyclic curve, so the stroke is marked closed.
fn assemble_loops<F>(loops: Vec<Polyline>, iterations: usize, smoother: F) -> Vec<Primitive>
where
    F: Fn(&[Point]) -> Result<Polyline>,
{
    let mut strokes = Vec::with_capacity(loops.len());

    for (index, raw) in loops.into_iter().enumerate() {
        if iterations == 0 {
            strokes.push(Primitive::ornament(raw));
            continue;
        }
        match smoother(&raw) {
            Ok(points) => strokes.push(Primitive::closed_ornament(points)),
            Err(err) => warn!("skipping grid loop {}: {}", index, err),
        }
    }

    strokes
}
