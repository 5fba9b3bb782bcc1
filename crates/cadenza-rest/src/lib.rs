//! # Cadenza REST
//!
//! HTTP layer for the music catalog: Axum controllers per resource, the
//! header-based identity gate, request logging, and the error-to-status
//! mapping (400 validation / 404 not found / 500 backend).

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
