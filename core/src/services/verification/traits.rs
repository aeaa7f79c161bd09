//! Traits for email delivery integration

use async_trait::async_trait;

/// Trait for the email delivery service
///
/// Delivery failure is reported to the caller but never rolls back code
/// issuance; the code stays valid so a resend can follow.
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send a verification code to an email address
    ///
    /// Returns a provider message id on success.
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}
