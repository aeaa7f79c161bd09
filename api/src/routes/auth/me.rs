//! Handler for GET /api/v1/auth/me

use actix_web::{web, HttpResponse};

use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::google::IdTokenVerifier;
use gc_core::services::verification::MailerTrait;

use crate::dto::auth::UserResponse;
use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Returns the account behind the presented session token.
///
/// Requires the JwtAuth middleware; the extractor fails with 401 when no
/// validated context is present.
pub async fn me<U, R, M, P>(
    state: web::Data<AppState<U, R, M, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: VerificationCodeRepository + 'static,
    M: MailerTrait + 'static,
    P: IdTokenVerifier + 'static,
{
    match state.auth_service.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => to_response(&error),
    }
}
