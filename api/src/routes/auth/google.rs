//! Handler for POST /api/v1/auth/google

use actix_web::{web, HttpResponse};
use validator::Validate;

use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::google::IdTokenVerifier;
use gc_core::services::verification::MailerTrait;

use crate::dto::auth::{GoogleAuthRequest, TokenResponse};
use crate::handlers::error::{to_response, validation_failure_response};
use crate::routes::AppState;

/// Authenticates with a Google ID token, creating or linking the account.
pub async fn google<U, R, M, P>(
    state: web::Data<AppState<U, R, M, P>>,
    request: web::Json<GoogleAuthRequest>,
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

    match state.google_service.login(&request.token).await {
        Ok(auth) => HttpResponse::Ok().json(TokenResponse::from(auth)),
        Err(error) => to_response(&error),
    }
}
