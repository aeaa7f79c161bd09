//! Value objects shared by services and the API layer.

pub mod auth_response;
pub mod session_identity;

pub use auth_response::AuthResponse;
pub use session_identity::SessionIdentity;
