//! HTTP transactional email implementation
//!
//! Posts verification codes to a Brevo-style transactional email API.
//! The request carries sender, recipient, subject, and a plain-text body;
//! the provider's message id comes back for tracing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use gc_core::services::verification::MailerTrait;
use gc_shared::config::EmailConfig;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailBody {
    sender: EmailAddress,
    to: Vec<EmailAddress>,
    subject: String,
    text_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    message_id: String,
}

/// Transactional email service backed by an HTTP API
pub struct ApiEmailService {
    client: reqwest::Client,
    config: EmailConfig,
}

impl ApiEmailService {
    /// Create a new API email service
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_KEY is required for the api email provider".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        Ok(Self { client, config })
    }

    fn verification_body(&self, to_email: &str, code: &str) -> SendEmailBody {
        SendEmailBody {
            sender: EmailAddress {
                email: self.config.from_address.clone(),
                name: Some(self.config.from_name.clone()),
            },
            to: vec![EmailAddress {
                email: to_email.to_string(),
                name: None,
            }],
            subject: format!("Verify your email - {}", self.config.from_name),
            text_content: format!(
                "Hello!\n\n\
                 Your verification code is: {}\n\n\
                 This code will expire in 15 minutes.\n\n\
                 If you didn't request this, please ignore this email.",
                code
            ),
        }
    }
}

#[async_trait]
impl MailerTrait for ApiEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let body = self.verification_body(email, code);

        debug!(to = email, "Sending verification email");

        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", &self.config.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(to = email, error = %e, "Email API request failed");
                format!("email request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(to = email, status = %status, "Email API rejected the message");
            return Err(format!("email API returned {}: {}", status, detail));
        }

        let parsed: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| format!("email API response unreadable: {}", e))?;

        info!(
            to = email,
            message_id = %parsed.message_id,
            "Verification email accepted by provider"
        );

        Ok(parsed.message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> EmailConfig {
        EmailConfig {
            provider: "api".to_string(),
            api_key: "test-key".to_string(),
            ..EmailConfig::default()
        }
    }

    #[test]
    fn service_requires_an_api_key() {
        let mut config = configured();
        config.api_key = String::new();
        assert!(ApiEmailService::new(config).is_err());
        assert!(ApiEmailService::new(configured()).is_ok());
    }

    #[test]
    fn verification_body_carries_the_code() {
        let service = ApiEmailService::new(configured()).unwrap();
        let body = service.verification_body("a@x.com", "042042");

        assert_eq!(body.to[0].email, "a@x.com");
        assert!(body.text_content.contains("042042"));
        assert!(body.text_content.contains("15 minutes"));

        // The code must survive serialization with leading zeros intact.
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("042042"));
    }
}
