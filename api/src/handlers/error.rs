//! Mapping from domain errors to HTTP responses
//!
//! Every service failure funnels through [`to_response`] so status codes
//! and client-facing error codes stay consistent across routes. Messages
//! for credential and code failures are generic on purpose; infrastructure
//! failures never leak store or provider internals to the client.

use actix_web::HttpResponse;
use std::collections::HashMap;
use validator::ValidationErrors;

use gc_core::errors::{AuthError, DomainError, TokenError};
use gc_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error into the matching HTTP response
pub fn to_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => auth_error_response(auth_error),
        DomainError::Token(token_error) => token_error_response(token_error),
        DomainError::ValidationErr(validation_error) => {
            HttpResponse::BadRequest().json(ErrorResponse::from(validation_error))
        }
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )),
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            // Retryable infrastructure failure; details stay in the logs.
            tracing::error!(error = %error, "Infrastructure failure while handling request");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred. Please try again later.",
            ))
        }
    }
}

fn auth_error_response(error: &AuthError) -> HttpResponse {
    let body = ErrorResponse::from(error);
    match error {
        AuthError::DuplicateEmail | AuthError::IdentityConflict => {
            HttpResponse::Conflict().json(body)
        }
        AuthError::InvalidCredentials | AuthError::InvalidFederatedToken => {
            HttpResponse::Unauthorized().json(body)
        }
        AuthError::NotVerified
        | AuthError::AccountDisabled
        | AuthError::RegistrationDisabled => HttpResponse::Forbidden().json(body),
        AuthError::InvalidOrExpiredCode | AuthError::AlreadyVerified => {
            HttpResponse::BadRequest().json(body)
        }
        AuthError::UserNotFound => HttpResponse::NotFound().json(body),
    }
}

fn token_error_response(error: &TokenError) -> HttpResponse {
    let body = ErrorResponse::from(error);
    match error {
        TokenError::TokenGenerationFailed => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::Unauthorized().json(body),
    }
}

/// Convert validator failures into a field-keyed 400 response
pub fn validation_failure_response(errors: &ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, serde_json::Value> = HashMap::new();
    for (field, errs) in errors.field_errors() {
        let messages: Vec<String> = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), serde_json::json!(messages));
    }

    HttpResponse::BadRequest().json(ErrorResponse::with_details(
        error_codes::VALIDATION_ERROR,
        "Invalid request data",
        field_errors,
    ))
}
