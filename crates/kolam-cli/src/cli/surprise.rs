//! Surprise command: a random kind with random parameters.
//!
//! Ranges and palettes are a little tighter than the interactive limits so
//! every roll looks reasonable. Pass `--seed` to get the same roll again.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rand::prelude::*;
use rand::rngs::StdRng;

use kolam::{
    FlowerParams, GridParams, PatternKind, PatternSpec, PolarParams, SpiralParams, StarParams,
};

use super::common::{default_stem, run_spec, OutputArgs};
use super::render::RenderOptions;

const GRID_COLORS: &[&str] = &["#000000", "#ff4500", "#1f77b4", "#2a9d8f"];
const POLAR_COLORS: &[&str] = &["#d62828", "#457b9d", "#ffb703"];
const FLOWER_COLORS: &[&str] = &["#9d4edd", "#e63946", "#2a9d8f"];
const STAR_COLORS: &[&str] = &["#264653", "#f4a261", "#e76f51"];
const SPIRAL_COLORS: &[&str] = &["#118ab2", "#06d6a0", "#ef476f"];

#[derive(Args, Debug, Clone)]
pub struct SurpriseArgs {
    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write `surprise_<kind>_kolam.svg` (and `.png`) into this directory
    #[arg(long, value_name = "DIR", conflicts_with_all = ["output", "png"])]
    pub save_dir: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[&str]) -> String {
    palette.choose(rng).copied().unwrap_or("#000000").to_string()
}

/// Round to two decimals, the way the sliders report values.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Roll a random pattern spec.
pub fn random_spec<R: Rng + ?Sized>(rng: &mut R) -> PatternSpec {
    let kind = *PatternKind::all().choose(rng).unwrap_or(&PatternKind::Grid);

    match kind {
        PatternKind::Grid => PatternSpec::Grid(GridParams {
            rows: rng.random_range(4..=10),
            cols: rng.random_range(4..=10),
            spacing: round2(rng.random_range(0.8..1.5)),
            row_offset: rng.random_bool(0.5),
            show_dots: true,
            smooth_iterations: 1,
            color: pick(rng, GRID_COLORS),
            line_width: 1.6,
            ..GridParams::default()
        }),
        PatternKind::Polar => PatternSpec::Polar(PolarParams {
            symmetry: rng.random_range(4..=10),
            size: rng.random_range(6..=15) as f64,
            color: pick(rng, POLAR_COLORS),
            line_width: 0.8,
        }),
        PatternKind::Flower => PatternSpec::Flower(FlowerParams {
            petals: rng.random_range(5..=12),
            radius: rng.random_range(3..=8) as f64,
            color: pick(rng, FLOWER_COLORS),
            ..FlowerParams::default()
        }),
        PatternKind::Star => PatternSpec::Star(StarParams {
            sides: rng.random_range(5..=10),
            layers: rng.random_range(2..=4),
            color: pick(rng, STAR_COLORS),
            ..StarParams::default()
        }),
        PatternKind::Spiral => PatternSpec::Spiral(SpiralParams {
            turns: rng.random_range(3..=8) as f64,
            spacing: round2(rng.random_range(0.15..0.3)),
            color: pick(rng, SPIRAL_COLORS),
            ..SpiralParams::default()
        }),
    }
}

/// Execute the surprise command.
pub fn cmd_surprise(args: &SurpriseArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let spec = random_spec(&mut rng);
    let mut output = args.output.clone();
    if let Some(dir) = &args.save_dir {
        let stem = format!("surprise_{}", default_stem(spec.kind()));
        output.output = Some(dir.join(format!("{stem}.svg")));
        output.png = Some(dir.join(format!("{stem}.png")));
        output.json = false;
    }

    eprintln!("Surprise kolam: {}", spec.kind());
    run_spec(&spec, true, &output, &RenderOptions::default())?;
    Ok(())
}
