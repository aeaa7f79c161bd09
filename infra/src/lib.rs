//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the GuideChat backend.
//! It provides concrete implementations for the repository and provider
//! seams defined in `gc_core`:
//!
//! - **Database**: MySQL implementations using SQLx
//! - **Email**: transactional email delivery for verification codes
//! - **OAuth**: Google ID-token verification over the tokeninfo endpoint

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email delivery module
pub mod email;

/// OAuth provider verification module
pub mod oauth;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
