//! Google login service implementation

use std::sync::Arc;

use gc_shared::utils::validation::normalize_email;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::traits::{FederatedIdentity, IdTokenVerifier};

/// Service handling Google federated logins
pub struct GoogleAuthService<U, P>
where
    U: UserRepository,
    P: IdTokenVerifier,
{
    /// User repository for account lookup and linking
    user_repository: Arc<U>,
    /// Provider token verifier
    verifier: Arc<P>,
    /// Token service for session issuance
    token_service: Arc<TokenService>,
}

impl<U, P> GoogleAuthService<U, P>
where
    U: UserRepository,
    P: IdTokenVerifier,
{
    /// Create a new Google auth service
    pub fn new(user_repository: Arc<U>, verifier: Arc<P>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            verifier,
            token_service,
        }
    }

    /// Log a user in with a Google ID token, creating or linking the account
    ///
    /// This method:
    /// 1. Verifies the token through the provider seam
    /// 2. Resolves the account: known subject id, email match to link, or
    ///    a brand-new verified account
    /// 3. Mints a session token for the resolved user
    ///
    /// Accounts created or linked here are always verified: the provider
    /// has already attested the email. Linking never touches an existing
    /// password hash.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Session token for the resolved user
    /// * `Err(AuthError::InvalidFederatedToken)` - Provider verification failed
    /// * `Err(AuthError::IdentityConflict)` - Email bound to another Google account
    /// * `Err(AuthError::AccountDisabled)` - Resolved account is inactive
    pub async fn login(&self, raw_token: &str) -> DomainResult<AuthResponse> {
        let identity = self.verifier.verify(raw_token).await?;
        let user = self.resolve_account(identity).await?;

        if !user.is_active {
            return Err(DomainError::Auth(AuthError::AccountDisabled));
        }

        let access_token = self.token_service.issue(user.id, &user.email)?;
        Ok(AuthResponse::bearer(
            access_token,
            self.token_service.expires_in_seconds(),
            user.id,
        ))
    }

    /// Create-or-link resolution for a verified provider identity
    async fn resolve_account(&self, identity: FederatedIdentity) -> DomainResult<User> {
        let email = normalize_email(&identity.email);

        // Fast path: the subject id is already linked.
        if let Some(user) = self.user_repository.find_by_google_id(&identity.subject).await? {
            return Ok(user);
        }

        match self.user_repository.find_by_email(&email).await? {
            Some(mut user) => {
                if user.google_id.is_some() {
                    // The email belongs to an account linked to a different
                    // Google subject.
                    tracing::warn!(
                        user_id = %user.id,
                        event = "google_identity_conflict",
                        "Google login email is bound to a different subject id"
                    );
                    return Err(DomainError::Auth(AuthError::IdentityConflict));
                }
                if !user.is_active {
                    return Err(DomainError::Auth(AuthError::AccountDisabled));
                }

                user.link_google(identity.subject, identity.name);
                let user = self.user_repository.update(user).await?;
                tracing::info!(
                    user_id = %user.id,
                    event = "google_account_linked",
                    "Linked Google identity to existing account"
                );
                Ok(user)
            }
            None => {
                let user = User::new_federated(email, identity.subject, identity.name);
                let user = self.user_repository.create(user).await?;
                tracing::info!(
                    user_id = %user.id,
                    event = "google_account_created",
                    "Created new account from Google identity"
                );
                Ok(user)
            }
        }
    }
}
