//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// ownership, conflicts). The single infrastructure variant is `Storage`, which
/// backends use when their own state becomes unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced resource (review, course, user) does not resolve.
    #[error("{0} not found")]
    NotFound(String),

    /// The operation would break a uniqueness rule (e.g. a second review by the
    /// same author for the same course).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The actor lacks ownership or role for the requested mutation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// An input value failed validation (e.g. rating out of range).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing store could not serve the request.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(DomainError::not_found("review").to_string(), "review not found");
        assert_eq!(
            DomainError::invalid_argument("rating must be between 1 and 5").to_string(),
            "invalid argument: rating must be between 1 and 5"
        );
        assert_eq!(
            DomainError::conflict("already reviewed").to_string(),
            "conflict: already reviewed"
        );
    }
}
