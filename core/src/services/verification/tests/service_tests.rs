//! Unit tests for the verification service

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::CODE_LENGTH;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{
    MockUserRepository, MockVerificationCodeRepository, UserRepository,
    VerificationCodeRepository,
};
use crate::services::verification::{VerificationService, VerificationServiceConfig};

use super::mocks::MockMailer;

type TestService =
    VerificationService<MockVerificationCodeRepository, MockUserRepository, MockMailer>;

struct Fixture {
    service: TestService,
    users: Arc<MockUserRepository>,
    codes: Arc<MockVerificationCodeRepository>,
    mailer: Arc<MockMailer>,
}

fn fixture(mailer_fails: bool) -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let codes = Arc::new(MockVerificationCodeRepository::new());
    let mailer = Arc::new(MockMailer::new(mailer_fails));
    let service = VerificationService::new(
        codes.clone(),
        users.clone(),
        mailer.clone(),
        VerificationServiceConfig::default(),
    );
    Fixture {
        service,
        users,
        codes,
        mailer,
    }
}

async fn unverified_user(users: &MockUserRepository) -> User {
    users
        .create(User::new_local(
            "a@x.com".to_string(),
            "hash".to_string(),
            None,
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn issue_persists_and_mails_the_code() {
    let f = fixture(false);
    let user = unverified_user(&f.users).await;

    let result = f.service.issue(user.id).await.unwrap();

    assert_eq!(result.verification_code.code.len(), CODE_LENGTH);
    assert!(result.delivered);
    assert!(result.message_id.as_deref().unwrap().starts_with("mock-msg-"));
    assert_eq!(
        f.mailer.sent_code("a@x.com"),
        Some(result.verification_code.code.clone())
    );
    assert!(f.codes.find_latest_active(user.id).await.unwrap().is_some());
}

#[tokio::test]
async fn issue_for_verified_user_fails() {
    let f = fixture(false);
    let user = unverified_user(&f.users).await;
    f.users.mark_verified(user.id).await.unwrap();

    let err = f.service.issue(user.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AlreadyVerified)));
}

#[tokio::test]
async fn issue_for_unknown_user_fails() {
    let f = fixture(false);
    let err = f.service.issue(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn mailer_failure_keeps_the_code_valid() {
    let f = fixture(true);
    let user = unverified_user(&f.users).await;

    let result = f.service.issue(user.id).await.unwrap();
    assert!(!result.delivered);
    assert!(result.message_id.is_none());

    // The undelivered code is still consumable.
    f.service
        .consume(user.id, &result.verification_code.code)
        .await
        .unwrap();
}

#[tokio::test]
async fn consume_succeeds_exactly_once() {
    let f = fixture(false);
    let user = unverified_user(&f.users).await;
    let code = f.service.issue(user.id).await.unwrap().verification_code.code;

    f.service.consume(user.id, &code).await.unwrap();
    let reloaded = f.users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(reloaded.is_verified);

    // A second attempt with the same digits fails the same generic way.
    let err = f.service.consume(user.id, &code).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidOrExpiredCode)
    ));
}

#[tokio::test]
async fn consume_rejects_wrong_code() {
    let f = fixture(false);
    let user = unverified_user(&f.users).await;
    let code = f.service.issue(user.id).await.unwrap().verification_code.code;

    let wrong = if code == "000000" { "000001" } else { "000000" };
    let err = f.service.consume(user.id, wrong).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidOrExpiredCode)
    ));

    // The right code still works afterwards.
    f.service.consume(user.id, &code).await.unwrap();
}

#[tokio::test]
async fn consume_rejects_expired_code() {
    let users = Arc::new(MockUserRepository::new());
    let codes = Arc::new(MockVerificationCodeRepository::new());
    let mailer = Arc::new(MockMailer::new(false));
    let service = VerificationService::new(
        codes.clone(),
        users.clone(),
        mailer,
        VerificationServiceConfig {
            code_expiration_minutes: -1,
        },
    );

    let user = unverified_user(&users).await;
    let code = service.issue(user.id).await.unwrap().verification_code.code;

    let err = service.consume(user.id, &code).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidOrExpiredCode)
    ));
}

#[tokio::test]
async fn newer_code_supersedes_older_one() {
    let f = fixture(false);
    let user = unverified_user(&f.users).await;

    let first = f.service.issue(user.id).await.unwrap().verification_code;
    // Push the first row's timestamp back so ordering is unambiguous.
    let mut rows = f.codes.codes_for(user.id).await;
    assert_eq!(rows.len(), 1);
    rows[0].created_at = rows[0].created_at - chrono::Duration::seconds(30);
    f.codes.create(rows.remove(0)).await.unwrap();

    let second = f.service.reissue(user.id).await.unwrap().verification_code;
    assert_ne!(first.id, second.id);

    // The superseded code is dead even though its row is unexpired...
    if first.code != second.code {
        let err = f.service.consume(user.id, &first.code).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidOrExpiredCode)
        ));
    }

    // ...and the newest one wins.
    f.service.consume(user.id, &second.code).await.unwrap();
}
