//! Handler for POST /api/v1/auth/resend-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::google::IdTokenVerifier;
use gc_core::services::verification::MailerTrait;

use crate::dto::auth::{MessageResponse, ResendCodeRequest};
use crate::handlers::error::{to_response, validation_failure_response};
use crate::routes::AppState;

/// Issues a fresh verification code for an unverified account.
///
/// The new code supersedes any outstanding ones.
pub async fn resend_code<U, R, M, P>(
    state: web::Data<AppState<U, R, M, P>>,
    request: web::Json<ResendCodeRequest>,
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

    match state.auth_service.resend_code(&request.email).await {
        Ok(_result) => HttpResponse::Ok().json(MessageResponse::ok(
            "A new verification code has been sent to your email.",
        )),
        Err(error) => to_response(&error),
    }
}
