//! Interactive parameter ranges.
//!
//! The generators only enforce mathematical domains (`rows >= 1`,
//! `spacing > 0`, ...). Front ends that let people pick values use these
//! narrower ranges, which keep output readable and bounded in size.

use crate::error::{KolamError, Result};

/// An inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy + std::fmt::Display> ParamRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reject `value` if it falls outside the range.
    pub fn check(&self, field: &'static str, value: T) -> Result<T> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(KolamError::invalid(
                field,
                format!("must be in [{}, {}], got {}", self.min, self.max, value),
            ))
        }
    }
}

// Grid
pub const GRID_ROWS: ParamRange<usize> = ParamRange::new(3, 12);
pub const GRID_COLS: ParamRange<usize> = ParamRange::new(3, 12);
pub const GRID_SPACING: ParamRange<f64> = ParamRange::new(0.6, 2.0);
pub const GRID_SMOOTH_ITERATIONS: ParamRange<usize> = ParamRange::new(0, 6);

// Polar
pub const POLAR_SYMMETRY: ParamRange<usize> = ParamRange::new(3, 12);
pub const POLAR_SIZE: ParamRange<f64> = ParamRange::new(4.0, 20.0);

// Flower
pub const FLOWER_PETALS: ParamRange<usize> = ParamRange::new(4, 16);
pub const FLOWER_RADIUS: ParamRange<f64> = ParamRange::new(2.0, 10.0);

// Star
pub const STAR_SIDES: ParamRange<usize> = ParamRange::new(3, 12);
pub const STAR_LAYERS: ParamRange<usize> = ParamRange::new(1, 5);
pub const STAR_SIZE: ParamRange<f64> = ParamRange::new(1.0, 20.0);

// Spiral
pub const SPIRAL_TURNS: ParamRange<f64> = ParamRange::new(2.0, 10.0);
pub const SPIRAL_SPACING: ParamRange<f64> = ParamRange::new(0.1, 0.5);
pub const SPIRAL_POINTS: ParamRange<usize> = ParamRange::new(2, 5000);

// Shared
pub const LINE_WIDTH: ParamRange<f64> = ParamRange::new(0.5, 3.0);
pub const FIGURE_SIZE_INCHES: ParamRange<f64> = ParamRange::new(4.0, 10.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds() {
        assert!(GRID_ROWS.contains(3));
        assert!(GRID_ROWS.contains(12));
        assert!(!GRID_ROWS.contains(2));
        assert!(!GRID_ROWS.contains(13));
        assert!(GRID_SPACING.contains(0.6));
        assert!(!GRID_SPACING.contains(2.01));
    }

    #[test]
    fn check_reports_range() {
        let err = STAR_LAYERS.check("layers", 9).unwrap_err();
        assert_eq!(err.field(), Some("layers"));
        assert!(err.to_string().contains("[1, 5]"));
        assert_eq!(STAR_LAYERS.check("layers", 4), Ok(4));
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(!LINE_WIDTH.contains(f64::NAN));
    }
}
