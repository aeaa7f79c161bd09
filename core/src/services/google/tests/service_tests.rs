//! Unit tests for the Google login service

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::google::{FederatedIdentity, GoogleAuthService, IdTokenVerifier};
use crate::services::token::{TokenService, TokenServiceConfig};

/// Verifier that accepts exactly one canned token
struct MockIdTokenVerifier {
    accepted_token: String,
    identity: FederatedIdentity,
}

#[async_trait]
impl IdTokenVerifier for MockIdTokenVerifier {
    async fn verify(&self, raw_token: &str) -> DomainResult<FederatedIdentity> {
        if raw_token == self.accepted_token {
            Ok(self.identity.clone())
        } else {
            Err(DomainError::Auth(AuthError::InvalidFederatedToken))
        }
    }
}

fn service_for(
    users: Arc<MockUserRepository>,
    identity: FederatedIdentity,
) -> GoogleAuthService<MockUserRepository, MockIdTokenVerifier> {
    let verifier = Arc::new(MockIdTokenVerifier {
        accepted_token: "good-token".to_string(),
        identity,
    });
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new("test-secret")));
    GoogleAuthService::new(users, verifier, token_service)
}

fn google_identity(email: &str) -> FederatedIdentity {
    FederatedIdentity {
        subject: "google-sub-1".to_string(),
        email: email.to_string(),
        name: Some("Alice".to_string()),
    }
}

#[tokio::test]
async fn new_email_creates_verified_passwordless_user() {
    let users = Arc::new(MockUserRepository::new());
    let service = service_for(users.clone(), google_identity("alice@example.com"));

    let response = service.login("good-token").await.unwrap();

    let user = users.find_by_id(response.user_id).await.unwrap().unwrap();
    assert_eq!(user.email, "alice@example.com");
    assert!(user.is_verified);
    assert!(!user.has_password());
    assert_eq!(user.google_id.as_deref(), Some("google-sub-1"));
}

#[tokio::test]
async fn existing_local_account_gets_linked_not_overwritten() {
    let users = Arc::new(MockUserRepository::new());
    let local = users
        .create(User::new_local(
            "alice@example.com".to_string(),
            "bcrypt-hash".to_string(),
            None,
        ))
        .await
        .unwrap();
    assert!(!local.is_verified);

    // Provider reports the email with different casing; linking still
    // finds the normalized account.
    let service = service_for(users.clone(), google_identity("Alice@Example.com"));
    let response = service.login("good-token").await.unwrap();
    assert_eq!(response.user_id, local.id);

    let linked = users.find_by_id(local.id).await.unwrap().unwrap();
    assert_eq!(linked.google_id.as_deref(), Some("google-sub-1"));
    assert_eq!(linked.password_hash.as_deref(), Some("bcrypt-hash"));
    assert!(linked.is_verified);
}

#[tokio::test]
async fn email_bound_to_other_subject_is_a_conflict() {
    let users = Arc::new(MockUserRepository::new());
    users
        .create(User::new_federated(
            "alice@example.com".to_string(),
            "some-other-subject".to_string(),
            None,
        ))
        .await
        .unwrap();

    let service = service_for(users, google_identity("alice@example.com"));
    let err = service.login("good-token").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::IdentityConflict)
    ));
}

#[tokio::test]
async fn repeat_login_resolves_by_subject_id() {
    let users = Arc::new(MockUserRepository::new());
    let service = service_for(users.clone(), google_identity("alice@example.com"));

    let first = service.login("good-token").await.unwrap();
    let second = service.login("good-token").await.unwrap();
    assert_eq!(first.user_id, second.user_id);
    assert_eq!(users.len().await, 1);
}

#[tokio::test]
async fn provider_rejection_maps_to_invalid_federated_token() {
    let users = Arc::new(MockUserRepository::new());
    let service = service_for(users, google_identity("alice@example.com"));

    let err = service.login("forged-token").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidFederatedToken)
    ));
}

#[tokio::test]
async fn disabled_account_cannot_log_in() {
    let users = Arc::new(MockUserRepository::new());
    let mut federated = User::new_federated(
        "alice@example.com".to_string(),
        "google-sub-1".to_string(),
        None,
    );
    federated.deactivate();
    users.create(federated).await.unwrap();

    let service = service_for(users, google_identity("alice@example.com"));
    let err = service.login("good-token").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AccountDisabled)));
}
