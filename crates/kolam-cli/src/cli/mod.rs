//! CLI command implementations.
//!
//! - `generate` - Build a pattern from flags
//! - `render` - Build a pattern from a YAML/JSON config file
//! - `surprise` - Roll a random pattern
//!
//! `common` holds the shared output path and `render` the SVG/PNG backend.

pub mod common;
pub mod config;
pub mod generate;
pub mod render;
pub mod surprise;

pub use config::{cmd_render, print_example};
pub use generate::cmd_generate;
pub use surprise::cmd_surprise;
