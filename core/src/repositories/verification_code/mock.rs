//! In-memory implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

use super::trait_::VerificationCodeRepository;

/// Mock verification code repository for testing
#[derive(Clone, Default)]
pub struct MockVerificationCodeRepository {
    codes: Arc<RwLock<HashMap<Uuid, VerificationCode>>>,
}

impl MockVerificationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored codes for a user, newest first (test helper)
    pub async fn codes_for(&self, user_id: Uuid) -> Vec<VerificationCode> {
        let codes = self.codes.read().await;
        let mut rows: Vec<_> = codes
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn create(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.insert(code.id, code.clone());
        Ok(code)
    }

    async fn find_latest_active(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .values()
            .filter(|c| c.user_id == user_id && c.is_valid())
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        match codes.get_mut(&id) {
            Some(code) if !code.is_used => {
                code.mark_used();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn latest_active_skips_used_and_expired() {
        let repo = MockVerificationCodeRepository::new();
        let user_id = Uuid::new_v4();

        let mut used = VerificationCode::new(user_id);
        used.mark_used();
        repo.create(used).await.unwrap();

        let expired = VerificationCode::new_with_expiration(user_id, -1);
        repo.create(expired).await.unwrap();

        assert!(repo.find_latest_active(user_id).await.unwrap().is_none());

        let live = VerificationCode::new(user_id);
        let live = repo.create(live).await.unwrap();
        let found = repo.find_latest_active(user_id).await.unwrap().unwrap();
        assert_eq!(found.id, live.id);
    }

    #[tokio::test]
    async fn latest_active_prefers_newest() {
        let repo = MockVerificationCodeRepository::new();
        let user_id = Uuid::new_v4();

        let mut older = VerificationCode::new(user_id);
        older.created_at = older.created_at - Duration::minutes(1);
        repo.create(older).await.unwrap();

        let newer = repo.create(VerificationCode::new(user_id)).await.unwrap();

        let found = repo.find_latest_active(user_id).await.unwrap().unwrap();
        assert_eq!(found.id, newer.id);
    }

    #[tokio::test]
    async fn mark_used_wins_only_once() {
        let repo = MockVerificationCodeRepository::new();
        let code = repo
            .create(VerificationCode::new(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(repo.mark_used(code.id).await.unwrap());
        assert!(!repo.mark_used(code.id).await.unwrap());
        assert!(!repo.mark_used(Uuid::new_v4()).await.unwrap());
    }
}
