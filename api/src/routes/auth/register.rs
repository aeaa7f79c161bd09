//! Handler for POST /api/v1/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::google::IdTokenVerifier;
use gc_core::services::verification::MailerTrait;

use crate::dto::auth::{RegisterRequest, UserResponse};
use crate::handlers::error::{to_response, validation_failure_response};
use crate::routes::AppState;

/// Registers a new local account and mails a verification code.
///
/// Returns 201 with the created (still unverified) user; login stays
/// blocked until the code is consumed.
pub async fn register<U, R, M, P>(
    state: web::Data<AppState<U, R, M, P>>,
    request: web::Json<RegisterRequest>,
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
        .register(
            &request.email,
            &request.password,
            request.display_name.clone(),
        )
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Registration accepted");
            HttpResponse::Created().json(serde_json::json!({
                "user": UserResponse::from(user),
                "message": "Registration successful. Please check your email for a verification code.",
            }))
        }
        Err(error) => to_response(&error),
    }
}
