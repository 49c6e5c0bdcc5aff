//! # kolam
//!
//! Procedural kolam line art. Every generator here is a pure function from a
//! small parameter struct to a [`Pattern`]: no I/O, no randomness, no shared
//! state, so the same parameters always give bit-identical points.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod error;
pub mod geometry;
pub mod limits;
pub mod pattern;
pub mod patterns;
pub mod smooth;

// Re-export common types at crate root for convenience.
pub use error::{KolamError, Result};
pub use geometry::{Point, PolarPoint, Polyline};
pub use pattern::{Pattern, PatternKind, Primitive, StrokeRole, Style};
pub use patterns::{
    build_grid, build_loops, generate_flower, generate_grid, generate_polar, generate_spiral,
    generate_star, polar_arcs, FlowerParams, GridParams, PatternSpec, PolarParams, SpiralParams,
    StarParams, LOOP_MARGIN,
};
pub use smooth::smooth;
