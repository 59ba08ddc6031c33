//! Domain-level errors shared by the repository and API layers.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        DomainError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomainError::NotFound("abc".into()).to_string(), "task not found: abc");
        assert_eq!(DomainError::InvalidInput("title required".into()).to_string(), "title required");
        assert_eq!(DomainError::internal("disk full").to_string(), "internal error: disk full");
    }
}
