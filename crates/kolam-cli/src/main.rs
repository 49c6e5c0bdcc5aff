//! kolam - generate kolam line art as SVG, PNG or JSON
//!
//! Usage:
//!   kolam kinds                        List pattern kinds
//!   kolam generate <kind> [flags]      Generate from flags (SVG to stdout)
//!   kolam render <config.yaml>         Generate from a config file
//!   kolam surprise [--seed N]          Random kind with random parameters
//!   kolam example                      Print an example config

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use kolam::PatternKind;

use cli::config::RenderArgs;
use cli::generate::GenerateArgs;
use cli::surprise::SurpriseArgs;

#[derive(Parser)]
#[command(name = "kolam", version, about = "Procedural kolam line art")]
struct Cli {
    /// Log progress to stderr (repeat for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available pattern kinds
    Kinds,
    /// Generate a pattern from command-line flags
    Generate(GenerateArgs),
    /// Generate a pattern from a YAML or JSON config file
    Render(RenderArgs),
    /// Generate a random pattern
    Surprise(SurpriseArgs),
    /// Print an example config file
    Example,
}

fn cmd_kinds() {
    println!("Available kinds:");
    for kind in PatternKind::all() {
        println!("  {:<8} {}", kind.name(), kind.description());
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Kinds => {
            cmd_kinds();
            Ok(())
        }
        Commands::Generate(args) => cli::cmd_generate(args),
        Commands::Render(args) => cli::cmd_render(args),
        Commands::Surprise(args) => cli::cmd_surprise(args),
        Commands::Example => cli::print_example(),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
