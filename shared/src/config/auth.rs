//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing session tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            access_token_expiry: 1800, // 30 minutes
            issuer: String::from("guide-chat"),
            audience: String::from("guide-chat-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

/// Google OAuth configuration
///
/// Only the client id is required here: the backend never exchanges
/// authorization codes, it verifies ID tokens minted for this client id.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleOAuthConfig {
    /// OAuth client id, used as the expected token audience
    pub client_id: String,
}

impl GoogleOAuthConfig {
    /// Create a new Google OAuth configuration
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }

    /// Whether Google login is configured for this deployment
    pub fn is_configured(&self) -> bool {
        !self.client_id.trim().is_empty()
    }
}

/// Combined authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Google OAuth configuration
    pub google: GoogleOAuthConfig,
}

impl AuthConfig {
    /// Load authentication configuration from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| JwtConfig::default().secret);
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1800);
        let google_client_id = std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default();

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expiry,
                ..Default::default()
            },
            google: GoogleOAuthConfig::new(google_client_id),
        }
    }
}
