//! Turn a `Pattern` into an SVG document, and an SVG document into a PNG.
//!
//! The drawing is fitted into a square canvas of `size_inches × 72` points.
//! Pattern data has +y pointing up, so the content group flips the y axis.
//! Stroke widths are given in points and divided by the content scale so they
//! come out the same size no matter how large the pattern is.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use kolam::limits;
use kolam::pattern::{GUIDE_COLOR, GUIDE_LINE_WIDTH};
use kolam::{Pattern, Point, StrokeRole};

/// Points per inch in SVG user units.
const POINTS_PER_INCH: f64 = 72.0;
/// Blank border around the drawing, as a fraction of its extent.
const PADDING_FRACTION: f64 = 0.05;
/// Anchor dot radius in points.
const DOT_RADIUS: f64 = 2.5;

/// Canvas and raster settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Canvas edge length in inches
    pub size_inches: f64,
    /// Raster resolution for PNG export
    pub dpi: f64,
    pub background: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { size_inches: 6.0, dpi: 300.0, background: "white".to_string() }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        limits::FIGURE_SIZE_INCHES.check("size_inches", self.size_inches)?;
        if !(self.dpi.is_finite() && self.dpi > 0.0 && self.dpi <= 1200.0) {
            bail!("dpi must be in (0, 1200], got {}", self.dpi);
        }
        check_color(&self.background)?;
        Ok(())
    }

    /// Canvas edge length in points.
    pub fn canvas_points(&self) -> f64 {
        self.size_inches * POINTS_PER_INCH
    }

    /// Raster edge length in pixels.
    pub fn pixel_size(&self) -> u32 {
        (self.size_inches * self.dpi).round().max(1.0) as u32
    }
}

/// Reject colors an SVG renderer would not understand.
pub fn check_color(color: &str) -> Result<()> {
    color
        .parse::<svgtypes::Color>()
        .map(|_| ())
        .map_err(|e| anyhow!("invalid color '{}': {}", color, e))
}

/// Maps pattern coordinates onto the canvas.
struct Fit {
    translate_x: f64,
    translate_y: f64,
    scale: f64,
}

impl Fit {
    fn new(pattern: &Pattern, canvas: f64) -> Self {
        let (min_x, min_y, max_x, max_y) = pattern.bounding_box().unwrap_or((-1.0, -1.0, 1.0, 1.0));
        let extent = (max_x - min_x).max(max_y - min_y);
        // A single dot has no extent; give it a unit box.
        let extent = if extent > 0.0 { extent } else { 1.0 };

        let scale = canvas / (extent * (1.0 + 2.0 * PADDING_FRACTION));
        let center_x = (min_x + max_x) / 2.0;
        let center_y = (min_y + max_y) / 2.0;

        Self {
            translate_x: canvas / 2.0 - center_x * scale,
            translate_y: canvas / 2.0 + center_y * scale,
            scale,
        }
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.4},{:.4}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a standalone SVG document for a pattern.
pub fn pattern_to_svg(pattern: &Pattern, options: &RenderOptions) -> Result<String> {
    check_color(&pattern.style.color)?;
    check_color(&options.background)?;

    let canvas = options.canvas_points();
    let fit = Fit::new(pattern, canvas);
    let ornament_width = pattern.style.line_width / fit.scale;
    let guide_width = GUIDE_LINE_WIDTH / fit.scale;

    let mut svg = String::new();
    write!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{canvas:.2}pt" height="{canvas:.2}pt" viewBox="0 0 {canvas:.2} {canvas:.2}">
  <title>{title}</title>
  <rect width="100%" height="100%" fill="{background}"/>
  <g transform="translate({tx:.4}, {ty:.4}) scale({s:.6}, {neg_s:.6})" fill="none" stroke-linecap="round" stroke-linejoin="round">
"##,
        canvas = canvas,
        title = pattern.kind.title(),
        background = options.background,
        tx = fit.translate_x,
        ty = fit.translate_y,
        s = fit.scale,
        neg_s = -fit.scale,
    )?;

    // Guides under ornaments, dots on top.
    for (role, color, width) in [
        (StrokeRole::Guide, GUIDE_COLOR, guide_width),
        (StrokeRole::Ornament, pattern.style.color.as_str(), ornament_width),
    ] {
        let strokes: Vec<_> = pattern.strokes().filter(|(r, _, _)| *r == role).collect();
        if strokes.is_empty() {
            continue;
        }

        writeln!(svg, r#"    <g class="{:?}" stroke="{}" stroke-width="{:.6}">"#, role, color, width)?;
        for (_, points, closed) in strokes {
            if points.len() < 2 {
                continue;
            }
            let element = if closed { "polygon" } else { "polyline" };
            writeln!(svg, r#"      <{} points="{}"/>"#, element, points_attr(points))?;
        }
        svg.push_str("    </g>\n");
    }

    let dots: Vec<&Point> = pattern.dots().collect();
    if !dots.is_empty() {
        writeln!(svg, r#"    <g class="Dots" fill="{}" stroke="none">"#, GUIDE_COLOR)?;
        let r = DOT_RADIUS / fit.scale;
        for p in dots {
            writeln!(svg, r#"      <circle cx="{:.4}" cy="{:.4}" r="{:.4}"/>"#, p.x, p.y, r)?;
        }
        svg.push_str("    </g>\n");
    }

    svg.push_str("  </g>\n</svg>\n");
    Ok(svg)
}

/// Rasterize an SVG document at the configured DPI and save it as PNG.
pub fn svg_to_png(svg: &str, options: &RenderOptions, png_path: &Path) -> Result<()> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .context("failed to parse generated SVG")?;

    let pixels = options.pixel_size();
    let mut pixmap = Pixmap::new(pixels, pixels).context("could not create pixmap")?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let scale = (options.dpi / POINTS_PER_INCH) as f32;
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .with_context(|| format!("failed to write {}", png_path.display()))?;
    info!("Wrote: {} ({}x{})", png_path.display(), pixels, pixels);
    Ok(())
}
