//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::google::IdTokenVerifier;
use gc_core::services::verification::MailerTrait;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::{to_response, validation_failure_response};
use crate::routes::AppState;

/// Authenticates with email and password, returning a session token.
///
/// Verified accounts only; an unverified account gets 403 with the
/// `EMAIL_NOT_VERIFIED` code so the client can offer the resend flow.
pub async fn login<U, R, M, P>(
    state: web::Data<AppState<U, R, M, P>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: VerificationCodeRepository + 'static,
    M: MailerTrait + 'static,
    P: IdTokenVerifier + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_failure_response(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(TokenResponse::from(auth)),
        Err(error) => to_response(&error),
    }
}
