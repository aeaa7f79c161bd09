//! Handler for POST /api/v1/auth/verify-email

use actix_web::{web, HttpResponse};
use validator::Validate;

use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::google::IdTokenVerifier;
use gc_core::services::verification::MailerTrait;

use crate::dto::auth::{MessageResponse, VerifyEmailRequest};
use crate::handlers::error::{to_response, validation_failure_response};
use crate::routes::AppState;

/// Consumes a verification code, marking the account's email verified.
pub async fn verify_email<U, R, M, P>(
    state: web::Data<AppState<U, R, M, P>>,
    request: web::Json<VerifyEmailRequest>,
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
        .verify_email(request.user_id, &request.code)
        .await
    {
        Ok(()) => {
            tracing::info!(user_id = %request.user_id, "Email verified");
            HttpResponse::Ok().json(MessageResponse::ok("Email verified. You can now log in."))
        }
        Err(error) => to_response(&error),
    }
}
