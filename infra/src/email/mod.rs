//! Email delivery - transactional email implementations of the mailer seam.

pub mod api_email;
pub mod mock_email;

pub use api_email::ApiEmailService;
pub use mock_email::MockEmailService;

use async_trait::async_trait;
use gc_core::services::verification::MailerTrait;
use gc_shared::config::EmailConfig;

use crate::InfrastructureError;

/// Mailer selected from configuration
///
/// Keeps the service layer's generic mailer parameter concrete at the
/// wiring site: one type covers both the HTTP provider and the console
/// fallback used in development.
pub enum EmailProvider {
    /// HTTP transactional email API
    Api(ApiEmailService),
    /// Console logger for development and tests
    Mock(MockEmailService),
}

impl EmailProvider {
    /// Build the mailer described by the configuration
    pub fn from_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if config.is_configured() {
            Ok(EmailProvider::Api(ApiEmailService::new(config.clone())?))
        } else {
            tracing::warn!(
                provider = %config.provider,
                "Email provider not configured; verification codes will be logged, not delivered"
            );
            Ok(EmailProvider::Mock(MockEmailService::new()))
        }
    }
}

#[async_trait]
impl MailerTrait for EmailProvider {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            EmailProvider::Api(mailer) => mailer.send_verification_code(email, code).await,
            EmailProvider::Mock(mailer) => mailer.send_verification_code(email, code).await,
        }
    }
}
