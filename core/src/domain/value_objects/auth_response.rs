//! Authentication response value object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a successful authentication (local login or Google login)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed session token
    pub access_token: String,

    /// Token scheme for the Authorization header
    pub token_type: String,

    /// Seconds until the access token expires
    pub expires_in: i64,

    /// The authenticated user id
    pub user_id: Uuid,
}

impl AuthResponse {
    /// Creates a bearer-token response
    pub fn bearer(access_token: String, expires_in: i64, user_id: Uuid) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
            user_id,
        }
    }
}
