//! Wayfarer HTTP presentation layer
//!
//! This crate provides the HTTP API for the Wayfarer gateway.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::{ApiError, set_expose_internal_errors};
pub use routes::create_router;
pub use state::AppState;
