//! HTTP middleware: CORS policy and JWT authentication.

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
