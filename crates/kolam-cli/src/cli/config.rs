//! Pattern config files.
//!
//! A config is a YAML (or JSON) document holding one pattern spec and,
//! optionally, canvas settings:
//!
//! ```yaml
//! pattern:
//!   kind: polar
//!   symmetry: 8
//!   size: 12
//!   color: "#457b9d"
//! render:
//!   size_inches: 8
//!   dpi: 150
//! ```
//!
//! Any parameter left out takes the kind's default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use kolam::PatternSpec;

use super::common::{run_spec, OutputArgs};
use super::render::RenderOptions;

/// A complete config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    pub pattern: PatternSpec,

    #[serde(default)]
    pub render: RenderOptions,
}

impl PatternConfig {
    /// Load a config, picking the parser from the file extension
    /// (`.json` for JSON, anything else for YAML).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        config.with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("failed to parse config YAML")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config JSON")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize config")
    }
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Config file (.yaml, .yml or .json)
    pub config: PathBuf,

    /// Skip the interactive range checks
    #[arg(long)]
    pub unchecked: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute the render command.
pub fn cmd_render(args: &RenderArgs) -> Result<()> {
    let config = PatternConfig::load(&args.config)?;
    run_spec(&config.pattern, !args.unchecked, &args.output, &config.render)?;
    Ok(())
}

/// Print an example config to stdout.
pub fn print_example() -> Result<()> {
    let example = PatternConfig {
        pattern: PatternSpec::default_for(kolam::PatternKind::Grid),
        render: RenderOptions::default(),
    };
    print!("{}", example.to_yaml()?);
    Ok(())
}
