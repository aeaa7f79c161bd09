//! User repository trait defining the interface for identity persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.
//! Implementations are responsible for upholding the identity invariants:
//! a unique constraint on `email` and on `google_id`, both arbitrating
//! concurrent create attempts atomically.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// All email arguments must already be normalized (see
/// `gc_shared::utils::validation::normalize_email`); the repository compares
/// them byte-for-byte.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their normalized email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their Google subject id
    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// The uniqueness check and the insert must be atomic: implementations
    /// lean on the store's unique constraints rather than a separate
    /// check-then-insert.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(AuthError::DuplicateEmail)` - Email already registered
    /// * `Err(AuthError::IdentityConflict)` - Google id already linked elsewhere
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    ///
    /// Refreshes `updated_at`. Unique-key violations map exactly as in
    /// [`UserRepository::create`], so a racing Google link cannot bind one
    /// subject id to two accounts.
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Mark a user's email as verified
    ///
    /// # Returns
    /// * `Ok(())` - User is now verified
    /// * `Err(AuthError::UserNotFound)` - No user with the given id
    async fn mark_verified(&self, id: Uuid) -> Result<(), DomainError>;
}
