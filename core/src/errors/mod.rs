//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// The `Auth`/`Token`/`Validation` variants are expected, caller-recoverable
/// conditions. `Database` and `Internal` are infrastructure failures and are
/// surfaced separately so the boundary layer can mark them retryable.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Whether this is an infrastructure failure rather than a
    /// user-correctable condition
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            DomainError::Database { .. } | DomainError::Internal { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_errors_are_flagged() {
        let db = DomainError::Database {
            message: "pool exhausted".to_string(),
        };
        assert!(db.is_infrastructure());

        let auth = DomainError::Auth(AuthError::InvalidCredentials);
        assert!(!auth.is_infrastructure());
    }
}
