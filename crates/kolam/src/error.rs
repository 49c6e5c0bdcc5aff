//! Error type for pattern generation.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
//! `Display` and `std::error::Error` impls for us from the `#[error]`
//! attributes, so each variant reads like the message it prints.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KolamError {
    /// A parameter outside its declared domain. Never clamped.
    #[error("invalid parameter '{field}': {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// The requested geometry would collapse or divide by zero.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

pub type Result<T> = std::result::Result<T, KolamError>;

impl KolamError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        KolamError::InvalidParameter { field, reason: reason.into() }
    }

    /// Name of the offending field, if this is a parameter error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            KolamError::InvalidParameter { field, .. } => Some(field),
            KolamError::DegenerateGeometry(_) => None,
        }
    }
}

// Domain checks shared by every generator. Each returns the value so they
// chain inside struct literals.

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(KolamError::invalid(field, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(KolamError::invalid(field, format!("must be > 0, got {value}")));
    }
    Ok(value)
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(KolamError::invalid(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(KolamError::invalid(field, format!("must be >= 0, got {value}")));
    }
    Ok(value)
}

pub(crate) fn require_at_least(field: &'static str, value: usize, min: usize) -> Result<usize> {
    if value < min {
        return Err(KolamError::invalid(field, format!("must be >= {min}, got {value}")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_field() {
        let err = KolamError::invalid("spacing", "must be > 0, got 0");
        assert_eq!(err.to_string(), "invalid parameter 'spacing': must be > 0, got 0");
        assert_eq!(err.field(), Some("spacing"));
    }

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(require_positive("size", 1.0).is_ok());
        assert_eq!(require_positive("size", 0.0).unwrap_err().field(), Some("size"));
        assert!(require_positive("size", f64::NAN).is_err());
        assert!(require_positive("size", f64::INFINITY).is_err());
    }

    #[test]
    fn non_negative_allows_zero() {
        assert_eq!(require_non_negative("margin", 0.0), Ok(0.0));
        assert!(require_non_negative("margin", -0.1).is_err());
    }

    #[test]
    fn at_least_bounds() {
        assert_eq!(require_at_least("sides", 3, 3), Ok(3));
        assert!(require_at_least("sides", 2, 3).is_err());
    }
}
