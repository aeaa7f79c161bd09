//! Domain-specific error types for authentication and related operations
//!
//! This module provides error type definitions for account, token, and
//! validation failures. The presentation layer maps these to HTTP statuses
//! and client-facing error codes; messages here stay deliberately generic
//! so credential and code failures never reveal whether an email exists.

use gc_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("This email is linked to a different Google account")]
    IdentityConflict,

    /// Wrong password and unknown email are deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email not verified")]
    NotVerified,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Invalid or expired verification code")]
    InvalidOrExpiredCode,

    #[error("Email already verified")]
    AlreadyVerified,

    #[error("Google token verification failed")]
    InvalidFederatedToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Registration is currently disabled")]
    RegistrationDisabled,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors raised before the core services run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must not be empty")]
    EmptyPassword,
}

/// Convert AuthError to ErrorResponse
impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        let error_code = match err {
            AuthError::DuplicateEmail => error_codes::DUPLICATE_EMAIL,
            AuthError::IdentityConflict => error_codes::IDENTITY_CONFLICT,
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::NotVerified => error_codes::EMAIL_NOT_VERIFIED,
            AuthError::AccountDisabled => error_codes::ACCOUNT_DISABLED,
            AuthError::InvalidOrExpiredCode => error_codes::INVALID_OR_EXPIRED_CODE,
            AuthError::AlreadyVerified => error_codes::ALREADY_VERIFIED,
            AuthError::InvalidFederatedToken => error_codes::INVALID_FEDERATED_TOKEN,
            AuthError::UserNotFound => error_codes::NOT_FOUND,
            AuthError::RegistrationDisabled => error_codes::FORBIDDEN,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        let error_code = match err {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::InvalidTokenFormat
            | TokenError::InvalidSignature
            | TokenError::TokenNotYetValid => error_codes::TOKEN_INVALID,
            TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<&ValidationError> for ErrorResponse {
    fn from(err: &ValidationError) -> Self {
        ErrorResponse::new(error_codes::VALIDATION_ERROR, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_errors_do_not_name_the_email() {
        // Unknown email and wrong password share one message.
        let err = AuthError::InvalidCredentials;
        let response = ErrorResponse::from(&err);
        assert_eq!(response.error, error_codes::INVALID_CREDENTIALS);
        assert!(!response.message.to_lowercase().contains("exist"));
    }

    #[test]
    fn code_errors_collapse_to_one_code() {
        let err = AuthError::InvalidOrExpiredCode;
        let response = ErrorResponse::from(&err);
        assert_eq!(response.error, error_codes::INVALID_OR_EXPIRED_CODE);
    }

    #[test]
    fn token_error_mapping() {
        assert_eq!(
            ErrorResponse::from(&TokenError::TokenExpired).error,
            error_codes::TOKEN_EXPIRED
        );
        assert_eq!(
            ErrorResponse::from(&TokenError::InvalidSignature).error,
            error_codes::TOKEN_INVALID
        );
    }
}
