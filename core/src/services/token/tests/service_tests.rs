//! Unit tests for the token service

use uuid::Uuid;

use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service_with_expiry(minutes: i64) -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "unit-test-secret".to_string(),
        access_token_expiry_minutes: minutes,
    })
}

#[test]
fn validate_returns_claims_right_after_issue() {
    let service = service_with_expiry(30);
    let user_id = Uuid::new_v4();

    let token = service.issue(user_id, "a@x.com").unwrap();
    let claims = service.validate(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.exp - claims.iat, 30 * 60);
}

#[test]
fn expired_token_is_rejected() {
    // Issue a token that expired five minutes ago; that clears the
    // decoder's default leeway window.
    let service = service_with_expiry(-5);
    let token = service.issue(Uuid::new_v4(), "a@x.com").unwrap();

    let err = service.validate(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn tampered_signature_is_rejected_before_expiry_checks() {
    // Even an expired token must fail on the signature when tampered with.
    let service = service_with_expiry(-5);
    let token = service.issue(Uuid::new_v4(), "a@x.com").unwrap();

    let (payload, signature) = token.rsplit_once('.').unwrap();
    let flipped: String = signature
        .chars()
        .enumerate()
        .map(|(i, c)| if i == 0 && c != 'A' { 'A' } else if i == 0 { 'B' } else { c })
        .collect();
    let tampered = format!("{}.{}", payload, flipped);

    let err = service.validate(&tampered).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn token_signed_with_another_secret_is_rejected() {
    let service = service_with_expiry(30);
    let other = TokenService::new(TokenServiceConfig::new("a-different-secret"));

    let token = other.issue(Uuid::new_v4(), "a@x.com").unwrap();
    let err = service.validate(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn garbage_input_is_a_format_error() {
    let service = service_with_expiry(30);
    let err = service.validate("definitely.not.a.jwt").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidTokenFormat)
    ));
}

#[test]
fn expires_in_matches_config() {
    let service = service_with_expiry(30);
    assert_eq!(service.expires_in_seconds(), 1800);
}
