//! Configuration for the token service

use crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_MINUTES;

/// Configuration for the token service
///
/// The signing secret is process-wide configuration loaded once at startup
/// and injected here; rotating it invalidates every outstanding token,
/// which the 30-minute expiry keeps tolerable.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}
