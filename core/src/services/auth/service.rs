//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use gc_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{UserRepository, VerificationCodeRepository};
use crate::services::password::PasswordService;
use crate::services::token::TokenService;
use crate::services::verification::{MailerTrait, SendCodeResult, VerificationService};

use super::config::AuthServiceConfig;

/// Authentication service for the local email/password flows
pub struct AuthService<U, R, M>
where
    U: UserRepository,
    R: VerificationCodeRepository,
    M: MailerTrait,
{
    /// User repository for identity persistence
    user_repository: Arc<U>,
    /// Password hashing and verification
    password_service: PasswordService,
    /// Verification code workflow
    verification_service: Arc<VerificationService<R, U, M>>,
    /// Token service for session issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, R, M> AuthService<U, R, M>
where
    U: UserRepository,
    R: VerificationCodeRepository,
    M: MailerTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        password_service: PasswordService,
        verification_service: Arc<VerificationService<R, U, M>>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_service,
            verification_service,
            token_service,
            config,
        }
    }

    /// Register a new local account
    ///
    /// This method:
    /// 1. Validates and normalizes the email address
    /// 2. Hashes the password (empty passwords are rejected)
    /// 3. Creates the account; the store's unique constraint arbitrates
    ///    concurrent registrations for the same email
    /// 4. Issues a verification code and hands it to the mailer; delivery
    ///    failure does not fail the registration
    ///
    /// The returned user is unverified; login stays blocked until the
    /// emailed code is consumed.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created, unverified user
    /// * `Err(AuthError::DuplicateEmail)` - Email already registered
    /// * `Err(ValidationError)` - Malformed email or empty password
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> DomainResult<User> {
        if !self.config.allow_registration {
            return Err(DomainError::Auth(AuthError::RegistrationDisabled));
        }
        if !is_valid_email(email) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidEmail));
        }

        let email = normalize_email(email);
        let password_hash = self.password_service.hash(password)?;

        let user = User::new_local(email, password_hash, display_name);
        let user = self.user_repository.create(user).await?;

        tracing::info!(
            user_id = %user.id,
            event = "user_registered",
            "Registered new local account"
        );

        // Delivery failure is already tolerated inside issue(); any error
        // that still escapes (e.g. storage) fails the registration response
        // but the account exists and resend remains available.
        self.verification_service.issue(user.id).await?;

        Ok(user)
    }

    /// Authenticate with email and password
    ///
    /// Unknown email, a Google-only account without a password, and a wrong
    /// password are deliberately indistinguishable: all return
    /// `InvalidCredentials`. Only after the credential check pass do the
    /// account-state checks run, so `NotVerified` confirms nothing to a
    /// caller who does not hold the password.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Session token for the user
    /// * `Err(AuthError::InvalidCredentials)` - Bad email/password pair
    /// * `Err(AuthError::AccountDisabled)` - Correct credentials, inactive account
    /// * `Err(AuthError::NotVerified)` - Correct credentials, unverified email
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => return Err(DomainError::Auth(AuthError::InvalidCredentials)),
        };

        let password_hash = match user.password_hash.as_deref() {
            Some(hash) => hash,
            // Google-only account; a password login cannot succeed.
            None => return Err(DomainError::Auth(AuthError::InvalidCredentials)),
        };

        if !self.password_service.verify(password, password_hash)? {
            tracing::debug!(
                user_id = %user.id,
                event = "login_failed",
                "Password mismatch"
            );
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        if !user.is_active {
            return Err(DomainError::Auth(AuthError::AccountDisabled));
        }
        if !user.is_verified {
            return Err(DomainError::Auth(AuthError::NotVerified));
        }

        let access_token = self.token_service.issue(user.id, &user.email)?;

        tracing::info!(
            user_id = %user.id,
            event = "login_succeeded",
            "Password login succeeded"
        );

        Ok(AuthResponse::bearer(
            access_token,
            self.token_service.expires_in_seconds(),
            user.id,
        ))
    }

    /// Consume a verification code for a user
    pub async fn verify_email(&self, user_id: Uuid, code: &str) -> DomainResult<()> {
        self.verification_service.consume(user_id, code).await
    }

    /// Reissue a verification code for an unverified account
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - New code issued (older ones superseded)
    /// * `Err(AuthError::UserNotFound)` - No account for this email
    /// * `Err(AuthError::AlreadyVerified)` - Nothing to verify
    pub async fn resend_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        let email = normalize_email(email);
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        self.verification_service.reissue(user.id).await
    }

    /// Load the account behind a validated session token
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }
}
