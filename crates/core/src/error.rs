//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is synchronous and caused by caller input: nothing here is
/// retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied input violated a precondition (absent or empty value,
    /// duplicate identifier, unknown identifier).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_carries_message() {
        let err = DomainError::invalid_argument("name can't be empty");
        assert_eq!(err.to_string(), "invalid argument: name can't be empty");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn invalid_id_is_not_an_invalid_argument() {
        assert!(!DomainError::invalid_id("ProductId: bad").is_invalid_argument());
    }
}
