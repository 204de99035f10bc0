//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (bad arguments and failed
/// validation). Everything here is a programming or input error, never a
/// transient condition, so nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A caller passed an argument the domain does not recognise
    /// (unknown facet name, malformed identifier, inverted range).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value failed validation (e.g. malformed configuration).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for errors caused by a bad caller argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DomainError::invalid_argument("unknown facet: size");
        assert_eq!(err.to_string(), "invalid argument: unknown facet: size");
        assert!(err.is_invalid_argument());
        assert!(!DomainError::validation("price_min is negative").is_invalid_argument());
    }
}
