//! Session token service
//!
//! Issues and validates signed, short-lived session tokens. The service is
//! stateless: there is no server-side session table and no revocation list,
//! possession of a valid token is the proof of identity.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
