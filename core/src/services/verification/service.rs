//! Main verification service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{UserRepository, VerificationCodeRepository};

use super::config::VerificationServiceConfig;
use super::traits::MailerTrait;
use super::types::SendCodeResult;

/// Verification service for issuing and consuming email codes
pub struct VerificationService<R, U, M>
where
    R: VerificationCodeRepository,
    U: UserRepository,
    M: MailerTrait,
{
    /// Code repository for persistence
    code_repository: Arc<R>,
    /// User repository for verification state
    user_repository: Arc<U>,
    /// Mailer for out-of-band delivery
    mailer: Arc<M>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<R, U, M> VerificationService<R, U, M>
where
    R: VerificationCodeRepository,
    U: UserRepository,
    M: MailerTrait,
{
    /// Create a new verification service
    pub fn new(
        code_repository: Arc<R>,
        user_repository: Arc<U>,
        mailer: Arc<M>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            code_repository,
            user_repository,
            mailer,
            config,
        }
    }

    /// Issue a verification code for a user and hand it to the mailer
    ///
    /// This method:
    /// 1. Rejects users that are already verified
    /// 2. Generates and persists a fresh code with a bounded lifetime
    /// 3. Sends the code by email; delivery failure is logged and reported
    ///    but the persisted code stays valid for a later resend
    ///
    /// Issuing supersedes any earlier outstanding codes for the user:
    /// they are not touched in storage, but `consume` only honors the
    /// newest valid one.
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The persisted code and delivery outcome
    /// * `Err(AuthError::UserNotFound)` - No such user
    /// * `Err(AuthError::AlreadyVerified)` - User needs no code
    pub async fn issue(&self, user_id: Uuid) -> DomainResult<SendCodeResult> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if user.is_verified {
            return Err(DomainError::Auth(AuthError::AlreadyVerified));
        }

        let code = VerificationCode::new_with_expiration(
            user_id,
            self.config.code_expiration_minutes,
        );
        let code = self.code_repository.create(code).await?;

        tracing::info!(
            user_id = %user_id,
            code_id = %code.id,
            event = "verification_code_issued",
            "Issued new verification code"
        );

        let (delivered, message_id) = match self
            .mailer
            .send_verification_code(&user.email, &code.code)
            .await
        {
            Ok(message_id) => (true, Some(message_id)),
            Err(e) => {
                tracing::warn!(
                    user_id = %user_id,
                    error = %e,
                    event = "verification_email_failed",
                    "Verification email delivery failed; code remains valid for resend"
                );
                (false, None)
            }
        };

        Ok(SendCodeResult {
            verification_code: code,
            delivered,
            message_id,
        })
    }

    /// Reissue a verification code (resend flow)
    ///
    /// Functionally identical to [`VerificationService::issue`]; the newly
    /// stored row becomes the only one `consume` will honor.
    pub async fn reissue(&self, user_id: Uuid) -> DomainResult<SendCodeResult> {
        self.issue(user_id).await
    }

    /// Consume a verification code and mark the user verified
    ///
    /// Looks up the newest unused, unexpired code for the user and compares
    /// it to the input in constant time. Mismatch, expiry, absence, and a
    /// lost consume race all collapse into `InvalidOrExpiredCode` so the
    /// caller learns nothing about which condition applied.
    pub async fn consume(&self, user_id: Uuid, input_code: &str) -> DomainResult<()> {
        let code = self
            .code_repository
            .find_latest_active(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidOrExpiredCode))?;

        if !code.matches(input_code) {
            tracing::debug!(
                user_id = %user_id,
                event = "verification_code_mismatch",
                "Verification code did not match the newest active code"
            );
            return Err(DomainError::Auth(AuthError::InvalidOrExpiredCode));
        }

        // Conditional write: if a concurrent request consumed this row
        // first, we lose and report the same generic failure.
        if !self.code_repository.mark_used(code.id).await? {
            return Err(DomainError::Auth(AuthError::InvalidOrExpiredCode));
        }

        self.user_repository.mark_verified(user_id).await?;

        tracing::info!(
            user_id = %user_id,
            code_id = %code.id,
            event = "verification_code_consumed",
            "Verification code consumed; user marked verified"
        );

        Ok(())
    }
}
