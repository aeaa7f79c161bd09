//! Google ID token verification
//!
//! Verifies ID tokens against Google's tokeninfo endpoint. The endpoint
//! only answers for tokens whose signature checks out against Google's
//! current keys, so this implementation validates audience, issuer, and
//! the attested email on top of that response.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use gc_core::errors::{AuthError, DomainError, DomainResult};
use gc_core::services::google::{FederatedIdentity, IdTokenVerifier};
use gc_shared::config::GoogleOAuthConfig;

use crate::InfrastructureError;

/// Google's tokeninfo endpoint for ID token introspection
const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Issuers Google mints ID tokens under
const VALID_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Claims returned by the tokeninfo endpoint
#[derive(Debug, Deserialize)]
struct TokenInfoPayload {
    /// Stable subject id
    sub: String,
    /// Audience the token was minted for
    aud: String,
    /// Token issuer
    iss: String,
    /// Attested email address
    email: Option<String>,
    /// "true"/"false" string per Google's representation
    email_verified: Option<String>,
    /// Display name
    name: Option<String>,
}

/// Google ID token verifier backed by the tokeninfo endpoint
pub struct GoogleTokenVerifier {
    client: reqwest::Client,
    config: GoogleOAuthConfig,
}

impl GoogleTokenVerifier {
    /// Create a new Google token verifier
    ///
    /// Without a configured client id the verifier still constructs but
    /// rejects every token, so Google login fails closed instead of
    /// failing open.
    pub fn new(config: GoogleOAuthConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            warn!("GOOGLE_CLIENT_ID is not set; Google login will reject all tokens");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(InfrastructureError::Http)?;

        Ok(Self { client, config })
    }

    /// Validate the introspected claims against this deployment
    fn validate_payload(
        payload: TokenInfoPayload,
        expected_audience: &str,
    ) -> DomainResult<FederatedIdentity> {
        if payload.aud != expected_audience {
            warn!(event = "google_token_rejected", reason = "audience mismatch");
            return Err(DomainError::Auth(AuthError::InvalidFederatedToken));
        }
        if !VALID_ISSUERS.contains(&payload.iss.as_str()) {
            warn!(event = "google_token_rejected", reason = "unexpected issuer");
            return Err(DomainError::Auth(AuthError::InvalidFederatedToken));
        }

        let email = match payload.email {
            Some(email) if !email.is_empty() => email,
            _ => {
                warn!(event = "google_token_rejected", reason = "no email claim");
                return Err(DomainError::Auth(AuthError::InvalidFederatedToken));
            }
        };
        if payload.email_verified.as_deref() != Some("true") {
            warn!(event = "google_token_rejected", reason = "email not verified");
            return Err(DomainError::Auth(AuthError::InvalidFederatedToken));
        }

        Ok(FederatedIdentity {
            subject: payload.sub,
            email,
            name: payload.name,
        })
    }
}

#[async_trait]
impl IdTokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, raw_token: &str) -> DomainResult<FederatedIdentity> {
        if !self.config.is_configured() {
            return Err(DomainError::Auth(AuthError::InvalidFederatedToken));
        }

        let response = self
            .client
            .get(TOKENINFO_URL)
            .query(&[("id_token", raw_token)])
            .send()
            .await
            .map_err(|e| {
                // Provider unreachable is an infrastructure failure, not a
                // statement about the token.
                DomainError::Internal {
                    message: format!("Google tokeninfo request failed: {}", e),
                }
            })?;

        if !response.status().is_success() {
            debug!(
                status = %response.status(),
                event = "google_token_rejected",
                "tokeninfo endpoint rejected the token"
            );
            return Err(DomainError::Auth(AuthError::InvalidFederatedToken));
        }

        let payload: TokenInfoPayload = response.json().await.map_err(|e| {
            DomainError::Internal {
                message: format!("Google tokeninfo response unreadable: {}", e),
            }
        })?;

        Self::validate_payload(payload, &self.config.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(aud: &str, iss: &str) -> TokenInfoPayload {
        TokenInfoPayload {
            sub: "google-sub-1".to_string(),
            aud: aud.to_string(),
            iss: iss.to_string(),
            email: Some("alice@example.com".to_string()),
            email_verified: Some("true".to_string()),
            name: Some("Alice".to_string()),
        }
    }

    #[test]
    fn accepts_matching_audience_and_issuer() {
        let identity =
            GoogleTokenVerifier::validate_payload(payload("client-1", "accounts.google.com"), "client-1")
                .unwrap();
        assert_eq!(identity.subject, "google-sub-1");
        assert_eq!(identity.email, "alice@example.com");
    }

    #[test]
    fn rejects_wrong_audience() {
        let err = GoogleTokenVerifier::validate_payload(
            payload("another-client", "accounts.google.com"),
            "client-1",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidFederatedToken)
        ));
    }

    #[test]
    fn rejects_unknown_issuer() {
        let err = GoogleTokenVerifier::validate_payload(
            payload("client-1", "https://evil.example.com"),
            "client-1",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidFederatedToken)
        ));
    }

    #[test]
    fn rejects_unverified_or_missing_email() {
        let mut p = payload("client-1", "accounts.google.com");
        p.email_verified = Some("false".to_string());
        assert!(GoogleTokenVerifier::validate_payload(p, "client-1").is_err());

        let mut p = payload("client-1", "accounts.google.com");
        p.email = None;
        assert!(GoogleTokenVerifier::validate_payload(p, "client-1").is_err());
    }

    #[tokio::test]
    async fn unconfigured_verifier_rejects_every_token() {
        let verifier = GoogleTokenVerifier::new(GoogleOAuthConfig::default()).unwrap();
        let err = verifier.verify("any-token").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidFederatedToken)
        ));
    }
}
