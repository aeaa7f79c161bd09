//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository for testing
///
/// Mirrors the MySQL implementation's constraint behavior: duplicate
/// emails and duplicate Google ids fail the same way the unique keys do.
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored users (test helper)
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store is empty (test helper)
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.google_id.as_deref() == Some(google_id))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::DuplicateEmail));
        }
        if let Some(ref google_id) = user.google_id {
            if users
                .values()
                .any(|u| u.google_id.as_deref() == Some(google_id))
            {
                return Err(DomainError::Auth(AuthError::IdentityConflict));
            }
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }
        if let Some(ref google_id) = user.google_id {
            if users
                .values()
                .any(|u| u.id != user.id && u.google_id.as_deref() == Some(google_id))
            {
                return Err(DomainError::Auth(AuthError::IdentityConflict));
            }
        }

        let mut updated = user;
        updated.updated_at = Utc::now();
        users.insert(updated.id, updated.clone());
        Ok(updated)
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.verify();
                Ok(())
            }
            None => Err(DomainError::Auth(AuthError::UserNotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let repo = MockUserRepository::new();
        let first = User::new_local("a@x.com".to_string(), "h1".to_string(), None);
        repo.create(first).await.unwrap();

        let second = User::new_local("a@x.com".to_string(), "h2".to_string(), None);
        let err = repo.create(second).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_google_id() {
        let repo = MockUserRepository::new();
        let first = User::new_federated("a@x.com".to_string(), "g1".to_string(), None);
        repo.create(first).await.unwrap();

        let second = User::new_federated("b@x.com".to_string(), "g1".to_string(), None);
        let err = repo.create(second).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::IdentityConflict)));
    }

    #[tokio::test]
    async fn mark_verified_flips_the_flag() {
        let repo = MockUserRepository::new();
        let user = User::new_local("a@x.com".to_string(), "h".to_string(), None);
        let created = repo.create(user).await.unwrap();
        assert!(!created.is_verified);

        repo.mark_verified(created.id).await.unwrap();
        let reloaded = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert!(reloaded.is_verified);
    }
}
