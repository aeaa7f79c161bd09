//! Verification code entity for email ownership checks.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (15 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 15;

/// Verification code entity for email ownership checks
///
/// Codes are single-use: the `is_used` flag transitions once, from unused
/// to used, and never back. Issuing a new code supersedes any older ones
/// for the same user; old rows stay behind for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the verification code
    pub id: Uuid,

    /// The user this code was issued to
    pub user_id: Uuid,

    /// The 6-digit code, zero-padded (string-typed to keep leading zeros)
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub is_used: bool,
}

impl VerificationCode {
    /// Creates a new verification code with a random 6-digit code
    pub fn new(user_id: Uuid) -> Self {
        Self::new_with_expiration(user_id, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new verification code with a custom expiration time
    pub fn new_with_expiration(user_id: Uuid, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            is_used: false,
        }
    }

    /// Generates a uniformly random 6-digit code from the OS entropy source
    fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the code is still consumable (unused and unexpired)
    pub fn is_valid(&self) -> bool {
        !self.is_used && !self.is_expired()
    }

    /// Compares an input code against this one in constant time
    pub fn matches(&self, input_code: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), input_code.as_bytes())
    }

    /// Marks the code as used; a used code never becomes valid again
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code_shape() {
        let code = VerificationCode::new(Uuid::new_v4());

        assert_eq!(code.code.len(), CODE_LENGTH);
        assert!(code.code.chars().all(|c| c.is_ascii_digit()));
        assert!(!code.is_used);
        assert!(code.is_valid());
    }

    #[test]
    fn test_expiry_window() {
        let code = VerificationCode::new(Uuid::new_v4());
        let lifetime = code.expires_at - code.created_at;
        assert_eq!(lifetime.num_minutes(), DEFAULT_EXPIRATION_MINUTES);
    }

    #[test]
    fn test_expired_code_is_invalid() {
        let code = VerificationCode::new_with_expiration(Uuid::new_v4(), -1);
        assert!(code.is_expired());
        assert!(!code.is_valid());
    }

    #[test]
    fn test_used_code_is_invalid() {
        let mut code = VerificationCode::new(Uuid::new_v4());
        code.mark_used();
        assert!(!code.is_valid());
    }

    #[test]
    fn test_matches_exact_code_only() {
        let mut code = VerificationCode::new(Uuid::new_v4());
        code.code = "012345".to_string();

        assert!(code.matches("012345"));
        assert!(!code.matches("12345"));
        assert!(!code.matches("012346"));
    }

    #[test]
    fn test_leading_zeros_preserved() {
        // Generate a batch; every code must stay 6 chars even when the
        // random value is below 100000.
        for _ in 0..64 {
            let code = VerificationCode::new(Uuid::new_v4());
            assert_eq!(code.code.len(), CODE_LENGTH);
        }
    }
}
