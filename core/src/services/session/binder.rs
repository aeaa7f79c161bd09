//! Binds an optional bearer token to a realtime connection identity.

use std::sync::Arc;

use crate::domain::value_objects::SessionIdentity;
use crate::errors::DomainResult;
use crate::services::token::TokenService;

/// Resolves the identity for a realtime connection at establishment time
///
/// Policy, fixed here rather than per-call: a connection without a token
/// proceeds as [`SessionIdentity::Anonymous`]; a connection that presents
/// a token must present a valid one, otherwise the bind fails and the
/// transport rejects the connection. There is no silent downgrade to
/// anonymous, and the binding never changes mid-connection.
pub struct SessionBinder {
    token_service: Arc<TokenService>,
}

impl SessionBinder {
    /// Create a new session binder
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Resolve the identity for a connection from an optional token
    ///
    /// # Returns
    ///
    /// * `Ok(SessionIdentity::Anonymous)` - No token supplied
    /// * `Ok(SessionIdentity::Authenticated { .. })` - Valid token
    /// * `Err(TokenError)` - Token supplied but invalid or expired
    pub fn bind(&self, token: Option<&str>) -> DomainResult<SessionIdentity> {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Ok(SessionIdentity::Anonymous),
        };

        let claims = self.token_service.validate(token)?;
        let user_id = claims.user_id()?;

        tracing::debug!(
            user_id = %user_id,
            event = "session_bound",
            "Bound realtime connection to authenticated user"
        );

        Ok(SessionIdentity::Authenticated { user_id })
    }
}
