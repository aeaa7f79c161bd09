//! # GuideChat API
//!
//! HTTP and realtime surface for the GuideChat backend. The REST routes
//! cover the identity lifecycle (register, login, Google login, email
//! verification, current user); the `/ws` endpoint upgrades to the chat
//! websocket after binding the connection to an identity.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
