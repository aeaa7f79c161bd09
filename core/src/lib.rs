//! # GuideChat Core
//!
//! Core business logic and domain layer for the GuideChat backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, User, VerificationCode};
pub use domain::value_objects::{AuthResponse, SessionIdentity};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
