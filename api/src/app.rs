//! Application factory
//!
//! Builds the Actix application with all routes and middleware wired to
//! the shared service state. Kept generic over the repository and
//! provider seams so integration tests can run the full HTTP surface on
//! in-memory implementations.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::google::IdTokenVerifier;
use gc_core::services::verification::MailerTrait;
use gc_shared::config::{CorsConfig, Environment};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{
    google::google, login::login, me::me, register::register, resend_code::resend_code,
    verify_email::verify_email,
};
use crate::routes::chat::ws::chat_ws;
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, R, M, P>(
    app_state: web::Data<AppState<U, R, M, P>>,
    cors_config: &CorsConfig,
    environment: Environment,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: VerificationCodeRepository + 'static,
    M: MailerTrait + 'static,
    P: IdTokenVerifier + 'static,
{
    let cors = create_cors(cors_config, environment);
    let token_service = app_state.token_service.clone();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, R, M, P>))
                    .route("/login", web::post().to(login::<U, R, M, P>))
                    .route("/google", web::post().to(google::<U, R, M, P>))
                    .route("/verify-email", web::post().to(verify_email::<U, R, M, P>))
                    .route("/resend-code", web::post().to(resend_code::<U, R, M, P>))
                    .route(
                        "/me",
                        web::get()
                            .to(me::<U, R, M, P>)
                            .wrap(JwtAuth::new(token_service)),
                    ),
            ),
        )
        // Realtime chat endpoint; the session binder runs inside the handler
        .route("/ws", web::get().to(chat_ws::<U, R, M, P>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "guide-chat-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
