use actix_web::{web, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gc_core::services::auth::{AuthService, AuthServiceConfig};
use gc_core::services::google::GoogleAuthService;
use gc_core::services::password::PasswordService;
use gc_core::services::session::SessionBinder;
use gc_core::services::token::{TokenService, TokenServiceConfig};
use gc_core::services::verification::{VerificationService, VerificationServiceConfig};
use gc_infra::database::{DatabasePool, MySqlUserRepository, MySqlVerificationCodeRepository};
use gc_infra::email::EmailProvider;
use gc_infra::oauth::GoogleTokenVerifier;
use gc_shared::config::AppConfig;

use gc_api::app;
use gc_api::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env();

    // Initialize tracing; RUST_LOG overrides the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.filter.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(environment = ?config.environment, "Starting GuideChat API server");

    if config.auth.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            panic!("JWT_SECRET must be set in production");
        }
        warn!("Using the default JWT secret; set JWT_SECRET before deploying");
    }

    // Database and repositories
    let pool = DatabasePool::new(config.database.clone())
        .await
        .expect("failed to create database pool");
    pool.health_check()
        .await
        .expect("database health check failed");

    let user_repository = Arc::new(MySqlUserRepository::new(pool.pool().clone()));
    let code_repository = Arc::new(MySqlVerificationCodeRepository::new(pool.pool().clone()));

    // External collaborators
    let mailer = Arc::new(
        EmailProvider::from_config(&config.email).expect("failed to configure email provider"),
    );
    let google_verifier = Arc::new(
        GoogleTokenVerifier::new(config.auth.google.clone())
            .expect("failed to build Google token verifier"),
    );

    // Core services
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: config.auth.jwt.secret.clone(),
        access_token_expiry_minutes: config.auth.jwt.access_token_expiry / 60,
    }));
    let verification_service = Arc::new(VerificationService::new(
        code_repository,
        user_repository.clone(),
        mailer,
        VerificationServiceConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        PasswordService::default(),
        verification_service,
        token_service.clone(),
        AuthServiceConfig::default(),
    ));
    let google_service = Arc::new(GoogleAuthService::new(
        user_repository,
        google_verifier,
        token_service.clone(),
    ));
    let session_binder = Arc::new(SessionBinder::new(token_service.clone()));

    let app_state = web::Data::new(AppState {
        auth_service,
        google_service,
        token_service,
        session_binder,
    });

    let bind_address = config.server.bind_address();
    info!(%bind_address, "Server binding");

    let workers = config.server.workers;
    let cors_config = config.cors.clone();
    let environment = config.environment;

    let mut server = HttpServer::new(move || {
        app::create_app(app_state.clone(), &cors_config, environment)
    });
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
