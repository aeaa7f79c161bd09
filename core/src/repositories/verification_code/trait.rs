//! Verification code repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

/// Repository trait for VerificationCode persistence
///
/// Rows are append-only apart from the single unused -> used transition.
/// Old codes are kept for audit; superseding happens at read time because
/// `find_latest_active` only ever surfaces the newest valid row.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Persist a freshly issued code
    async fn create(&self, code: VerificationCode) -> Result<VerificationCode, DomainError>;

    /// The most recently created unused, unexpired code for a user
    ///
    /// This is the only read path used during consumption, which is what
    /// makes "only the newest valid code is honored" hold even though
    /// older rows remain in storage.
    async fn find_latest_active(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Atomically mark a code as used
    ///
    /// Must be a conditional write (`is_used` false -> true). Returns
    /// `Ok(false)` when the code was already used or does not exist, so
    /// two concurrent consumers cannot both win with the same code.
    async fn mark_used(&self, id: Uuid) -> Result<bool, DomainError>;
}
