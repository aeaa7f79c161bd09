//! Route handlers and shared application state.

pub mod auth;
pub mod chat;

use std::sync::Arc;

use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::auth::AuthService;
use gc_core::services::google::{GoogleAuthService, IdTokenVerifier};
use gc_core::services::session::SessionBinder;
use gc_core::services::token::TokenService;
use gc_core::services::verification::MailerTrait;

/// Application state that holds the shared services
pub struct AppState<U, R, M, P>
where
    U: UserRepository,
    R: VerificationCodeRepository,
    M: MailerTrait,
    P: IdTokenVerifier,
{
    pub auth_service: Arc<AuthService<U, R, M>>,
    pub google_service: Arc<GoogleAuthService<U, P>>,
    pub token_service: Arc<TokenService>,
    pub session_binder: Arc<SessionBinder>,
}
