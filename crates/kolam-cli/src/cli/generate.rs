//! Generate command: build a pattern from command-line flags.

use anyhow::Result;
use clap::Args;
use log::warn;

use kolam::{PatternKind, PatternSpec, Style};

use super::common::{run_spec, OutputArgs};
use super::render::{check_color, RenderOptions};

/// Parse a pattern kind, accepting the same aliases as `PatternKind::from_name`.
pub fn parse_kind(name: &str) -> Result<PatternKind, String> {
    PatternKind::from_name(name).ok_or_else(|| {
        let known: Vec<_> = PatternKind::all().iter().map(|k| k.name()).collect();
        format!("unknown pattern '{}' (expected one of: {})", name, known.join(", "))
    })
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Pattern kind: grid, polar, flower, star or spiral
    #[arg(value_parser = parse_kind)]
    pub kind: PatternKind,

    /// Grid: dot rows
    #[arg(long, help_heading = "Grid")]
    pub rows: Option<usize>,
    /// Grid: dot columns
    #[arg(long, help_heading = "Grid")]
    pub cols: Option<usize>,
    /// Grid: dot spacing / Spiral: radius gained per radian
    #[arg(long)]
    pub spacing: Option<f64>,
    /// Grid: keep every row aligned instead of shifting odd rows
    #[arg(long, help_heading = "Grid")]
    pub no_offset: bool,
    /// Grid: leave out the anchor dots
    #[arg(long, help_heading = "Grid")]
    pub no_dots: bool,
    /// Grid: Chaikin smoothing passes per loop
    #[arg(long, help_heading = "Grid")]
    pub smooth: Option<usize>,
    /// Grid: how far loops bulge out of their cell
    #[arg(long, help_heading = "Grid")]
    pub margin: Option<f64>,

    /// Polar: rings (spokes = max(6, 6 × symmetry))
    #[arg(long, help_heading = "Polar")]
    pub symmetry: Option<usize>,
    /// Polar / Star: outer radius
    #[arg(long)]
    pub size: Option<f64>,

    /// Flower: number of petals
    #[arg(long, help_heading = "Flower")]
    pub petals: Option<usize>,
    /// Flower: petal radius
    #[arg(long, help_heading = "Flower")]
    pub radius: Option<f64>,

    /// Star: polygon vertices
    #[arg(long, help_heading = "Star")]
    pub sides: Option<usize>,
    /// Star: concentric layers
    #[arg(long, help_heading = "Star")]
    pub layers: Option<usize>,

    /// Spiral: full turns
    #[arg(long, help_heading = "Spiral")]
    pub turns: Option<f64>,
    /// Spiral: sample count
    #[arg(long, help_heading = "Spiral")]
    pub points: Option<usize>,

    /// Stroke color (hex or CSS name)
    #[arg(long)]
    pub color: Option<String>,
    /// Stroke width in points
    #[arg(long)]
    pub line_width: Option<f64>,

    /// Skip the interactive range checks; only reject values the geometry
    /// cannot handle
    #[arg(long)]
    pub unchecked: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl GenerateArgs {
    /// Build a spec from the kind's defaults plus any flags given.
    ///
    /// Flags that do not apply to the chosen kind are reported and ignored.
    pub fn to_spec(&self) -> PatternSpec {
        let mut spec = PatternSpec::default_for(self.kind);
        let mut used: Vec<&'static str> = Vec::new();

        match &mut spec {
            PatternSpec::Grid(p) => {
                set(&mut p.rows, self.rows, "rows", &mut used);
                set(&mut p.cols, self.cols, "cols", &mut used);
                set(&mut p.spacing, self.spacing, "spacing", &mut used);
                set(&mut p.smooth_iterations, self.smooth, "smooth", &mut used);
                set(&mut p.margin, self.margin, "margin", &mut used);
                p.row_offset = !self.no_offset;
                p.show_dots = !self.no_dots;
                used.extend(["no_offset", "no_dots"]);
            }
            PatternSpec::Polar(p) => {
                set(&mut p.symmetry, self.symmetry, "symmetry", &mut used);
                set(&mut p.size, self.size, "size", &mut used);
            }
            PatternSpec::Flower(p) => {
                set(&mut p.petals, self.petals, "petals", &mut used);
                set(&mut p.radius, self.radius, "radius", &mut used);
            }
            PatternSpec::Star(p) => {
                set(&mut p.sides, self.sides, "sides", &mut used);
                set(&mut p.layers, self.layers, "layers", &mut used);
                set(&mut p.size, self.size, "size", &mut used);
            }
            PatternSpec::Spiral(p) => {
                set(&mut p.turns, self.turns, "turns", &mut used);
                set(&mut p.point_count, self.points, "points", &mut used);
                set(&mut p.spacing, self.spacing, "spacing", &mut used);
            }
        }

        let style = spec.style();
        spec.set_style(Style::new(
            self.color.clone().unwrap_or(style.color),
            self.line_width.unwrap_or(style.line_width),
        ));

        for flag in self.given_flags() {
            if !used.contains(&flag) {
                warn!("--{} does not apply to {} patterns, ignoring", flag.replace('_', "-"), self.kind);
            }
        }

        spec
    }

    fn given_flags(&self) -> Vec<&'static str> {
        let flags = [
            ("rows", self.rows.is_some()),
            ("cols", self.cols.is_some()),
            ("spacing", self.spacing.is_some()),
            ("no_offset", self.no_offset),
            ("no_dots", self.no_dots),
            ("smooth", self.smooth.is_some()),
            ("margin", self.margin.is_some()),
            ("symmetry", self.symmetry.is_some()),
            ("size", self.size.is_some()),
            ("petals", self.petals.is_some()),
            ("radius", self.radius.is_some()),
            ("sides", self.sides.is_some()),
            ("layers", self.layers.is_some()),
            ("turns", self.turns.is_some()),
            ("points", self.points.is_some()),
        ];
        flags.iter().filter(|(_, given)| *given).map(|(name, _)| *name).collect()
    }
}

fn set<T: Copy>(field: &mut T, value: Option<T>, name: &'static str, used: &mut Vec<&'static str>) {
    used.push(name);
    if let Some(v) = value {
        *field = v;
    }
}

/// Execute the generate command.
pub fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let spec = args.to_spec();
    check_color(&spec.style().color)?;
    run_spec(&spec, !args.unchecked, &args.output, &RenderOptions::default())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["kolam"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).args
    }

    #[test]
    fn kind_aliases() {
        assert_eq!(parse_kind("Petals"), Ok(PatternKind::Flower));
        assert!(parse_kind("hexagon").unwrap_err().contains("grid, polar"));
    }

    #[test]
    fn grid_flags_apply() {
        let spec = parse(&["grid", "--rows", "8", "--cols", "4", "--no-offset", "--smooth", "2"]).to_spec();
        match spec {
            PatternSpec::Grid(p) => {
                assert_eq!((p.rows, p.cols, p.smooth_iterations), (8, 4, 2));
                assert!(!p.row_offset);
                assert!(p.show_dots);
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn shared_spacing_flag_goes_to_spiral() {
        let spec = parse(&["spiral", "--spacing", "0.3", "--turns", "5", "--rows", "9"]).to_spec();
        match spec {
            PatternSpec::Spiral(p) => {
                assert_eq!(p.spacing, 0.3);
                assert_eq!(p.turns, 5.0);
                assert_eq!(p.point_count, 500);
            }
            other => panic!("expected spiral, got {:?}", other),
        }
    }

    #[test]
    fn style_overrides() {
        let spec = parse(&["star", "--color", "gold", "--line-width", "2.5"]).to_spec();
        assert_eq!(spec.style(), Style::new("gold", 2.5));

        let spec = parse(&["star"]).to_spec();
        assert_eq!(spec.style(), Style::new("#2a9d8f", 1.5));
    }
}
