//! Traits for identity provider integration

use async_trait::async_trait;

use crate::errors::DomainResult;

/// A verified assertion extracted from a provider ID token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedIdentity {
    /// The provider's stable subject id for this user
    pub subject: String,
    /// Email attested by the provider
    pub email: String,
    /// Display name, when the provider shares one
    pub name: Option<String>,
}

/// Trait for verifying provider-issued ID tokens
///
/// Implementations check the token's signature and audience against the
/// provider's public verification mechanism. A token that fails those
/// checks maps to `AuthError::InvalidFederatedToken`; an unreachable
/// provider maps to `DomainError::Internal` so the boundary layer can
/// mark it retryable.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    /// Verify a raw ID token and extract the attested identity
    async fn verify(&self, raw_token: &str) -> DomainResult<FederatedIdentity>;
}
