//! Common utilities shared across CLI commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use serde::Serialize;

use kolam::{Pattern, PatternKind, PatternSpec};

use super::render::{pattern_to_svg, svg_to_png, RenderOptions};

/// Output format for generated patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Flags controlling where and how a pattern is written.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write the SVG (or JSON) here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also rasterize to this PNG file
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// PNG resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<f64>,

    /// Canvas edge length in inches (4-10)
    #[arg(long = "fig-size", value_name = "INCHES")]
    pub fig_size: Option<f64>,

    /// Emit pattern geometry as JSON instead of SVG
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json { OutputFormat::Json } else { OutputFormat::Svg }
    }

    /// Layer command-line overrides on top of `base`.
    pub fn render_options(&self, base: &RenderOptions) -> RenderOptions {
        RenderOptions {
            size_inches: self.fig_size.unwrap_or(base.size_inches),
            dpi: self.dpi.unwrap_or(base.dpi),
            background: base.background.clone(),
        }
    }
}

/// Summary counts included in JSON output.
#[derive(Debug, Serialize)]
pub struct PatternStats {
    pub strokes: usize,
    pub dots: usize,
    pub points: usize,
}

/// JSON output: the `PatternSpec` that produced the pattern plus its geometry.
#[derive(Serialize)]
struct JsonOutput<'a> {
    spec: &'a PatternSpec,
    stats: PatternStats,
    pattern: &'a Pattern,
}

pub fn pattern_stats(pattern: &Pattern) -> PatternStats {
    PatternStats {
        strokes: pattern.strokes().count(),
        dots: pattern.dots().count(),
        points: pattern.point_count(),
    }
}

/// Check, generate and write a pattern.
///
/// `checked` applies the interactive parameter ranges before generating;
/// the generator's own domain checks always run.
pub fn run_spec(spec: &PatternSpec, checked: bool, out: &OutputArgs, base: &RenderOptions) -> Result<Pattern> {
    if checked {
        spec.check_ranges()
            .with_context(|| format!("{} parameters out of range", spec.kind()))?;
    }
    let options = out.render_options(base);
    options.validate()?;

    let pattern = spec
        .generate()
        .with_context(|| format!("failed to generate {} pattern", spec.kind()))?;

    let stats = pattern_stats(&pattern);
    info!(
        "Generated {}: {} strokes, {} dots, {} points",
        spec.kind(), stats.strokes, stats.dots, stats.points
    );

    let svg = pattern_to_svg(&pattern, &options)?;
    let body = match out.format() {
        OutputFormat::Svg => svg.clone(),
        OutputFormat::Json => {
            let output = JsonOutput { spec, stats, pattern: &pattern };
            serde_json::to_string_pretty(&output).context("failed to serialize pattern")? + "\n"
        }
    };

    match &out.output {
        Some(path) => {
            fs::write(path, &body).with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote: {}", path.display());
        }
        None => print!("{}", body),
    }

    if let Some(png_path) = &out.png {
        svg_to_png(&svg, &options, png_path)?;
    }

    Ok(pattern)
}

/// Default file stem for a kind, e.g. `star_kolam`.
pub fn default_stem(kind: PatternKind) -> String {
    format!("{}_kolam", kind.name())
}
