//! Error types shared by the scoring, offer and amortization engines

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the origination library
#[derive(Debug, Error)]
pub enum OriginationError {
    /// A caller-supplied value is outside its domain.
    /// Raised before any arithmetic is attempted.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A loaded assumption table is incomplete or inconsistent
    #[error("invalid assumptions: {0}")]
    Assumptions(String),

    #[error("summary generation failed: {0}")]
    Summary(String),
}

impl OriginationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        OriginationError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Field name for `InvalidInput`, `None` for every other kind
    pub fn field(&self) -> Option<&'static str> {
        match self {
            OriginationError::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OriginationError>;

/// Require a finite, strictly positive value
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(OriginationError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value <= 0.0 {
        return Err(OriginationError::invalid(field, format!("must be positive, got {}", value)));
    }
    Ok(value)
}

/// Require a finite value that is zero or greater
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(OriginationError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(OriginationError::invalid(field, format!("must not be negative, got {}", value)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = OriginationError::invalid("income", "must be positive, got -1");
        assert_eq!(err.to_string(), "invalid income: must be positive, got -1");
        assert_eq!(err.field(), Some("income"));
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("amount", 1000.0).unwrap(), 1000.0);
        assert!(ensure_positive("amount", 0.0).is_err());
        assert!(ensure_positive("amount", -5.0).is_err());
        assert!(ensure_positive("amount", f64::NAN).is_err());
        assert!(ensure_positive("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("rate", 0.0).unwrap(), 0.0);
        assert!(ensure_non_negative("rate", -0.01).is_err());
        assert!(ensure_non_negative("rate", f64::NAN).is_err());
    }
}
