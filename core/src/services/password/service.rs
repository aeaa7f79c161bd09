//! Password credential management backed by bcrypt.

use crate::errors::{DomainError, DomainResult, ValidationError};

/// Service for hashing and verifying password credentials
///
/// Bcrypt generates a fresh random salt per call and embeds it in the hash
/// output, so verification needs no separate salt storage; comparison
/// inside `bcrypt::verify` is constant-time. Plaintext passwords are never
/// logged or returned.
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordService {
    /// Creates a password service with an explicit bcrypt cost factor
    ///
    /// Lower costs are only appropriate in tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a password
    ///
    /// Empty passwords are rejected before hashing.
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        if password.is_empty() {
            return Err(DomainError::ValidationErr(ValidationError::EmptyPassword));
        }

        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verifies a password against a stored hash
    ///
    /// Returns `Ok(false)` for a mismatch; `Err` only on malformed hashes.
    pub fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> PasswordService {
        // Minimum cost keeps the test suite fast.
        PasswordService::with_cost(4)
    }

    #[test]
    fn hash_then_verify_round_trip() {
        let service = test_service();
        let hash = service.hash("correct horse battery staple").unwrap();

        assert!(service.verify("correct horse battery staple", &hash).unwrap());
        assert!(!service.verify("correct horse battery stapler", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted_per_call() {
        let service = test_service();
        let first = service.hash("pw1").unwrap();
        let second = service.hash("pw1").unwrap();

        assert_ne!(first, second);
        assert!(service.verify("pw1", &first).unwrap());
        assert!(service.verify("pw1", &second).unwrap());
    }

    #[test]
    fn empty_password_is_rejected() {
        let service = test_service();
        let err = service.hash("").unwrap_err();
        assert!(matches!(
            err,
            DomainError::ValidationErr(ValidationError::EmptyPassword)
        ));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let service = test_service();
        assert!(service.verify("pw", "not-a-bcrypt-hash").is_err());
    }
}
