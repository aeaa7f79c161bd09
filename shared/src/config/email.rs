//! Transactional email delivery configuration

use serde::{Deserialize, Serialize};

/// Email delivery configuration
///
/// The notifier posts to an HTTP transactional-email API. When no API key
/// is configured the server falls back to the console mailer, which logs
/// codes instead of delivering them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("api" or "mock")
    pub provider: String,

    /// Base URL of the transactional email API
    pub api_url: String,

    /// API key for the email provider
    pub api_key: String,

    /// Sender address shown to recipients
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            api_url: "https://api.brevo.com/v3/smtp/email".to_string(),
            api_key: String::new(),
            from_address: "no-reply@guidechat.app".to_string(),
            from_name: "GuideChat".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl EmailConfig {
    /// Load email configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_url: std::env::var("EMAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or_default(),
            from_address: std::env::var("EMAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            from_name: std::env::var("EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
            request_timeout_secs: std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Whether a real provider is configured
    pub fn is_configured(&self) -> bool {
        self.provider == "api" && !self.api_key.trim().is_empty()
    }
}
