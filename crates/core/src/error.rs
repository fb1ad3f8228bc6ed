//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input failures. Lookup failures are
/// reported by each module's own error type, which carries the typed id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Require `value` to contain at least one non-whitespace character.
pub fn require_non_blank(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require `value` to be a finite, non-negative amount.
pub fn require_valid_amount(value: f64, field: &str) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(DomainError::validation(format!("{field} cannot be negative")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        for value in ["", " ", "\t\n "] {
            let err = require_non_blank(value, "name").unwrap_err();
            assert_eq!(err, DomainError::Validation("name cannot be empty".to_string()));
        }
        assert!(require_non_blank(" Alice ", "name").is_ok());
    }

    #[test]
    fn amounts_must_be_finite_and_non_negative() {
        assert!(require_valid_amount(0.0, "price").is_ok());
        assert!(require_valid_amount(9.99, "price").is_ok());

        match require_valid_amount(-0.01, "price").unwrap_err() {
            DomainError::Validation(msg) if msg.contains("negative") => {}
            other => panic!("Expected negative-price validation error, got {other:?}"),
        }
        assert!(require_valid_amount(f64::NAN, "price").is_err());
        assert!(require_valid_amount(f64::INFINITY, "price").is_err());
    }
}
