//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service banner and health
        .route("/", get(handlers::health::banner))
        .route("/health", get(handlers::health::health_check))
        // Completion gateway
        .route("/chat", post(handlers::chat::chat))
        .route("/generate-text", post(handlers::generate::generate_text))
        // Speech gateway
        .route("/text-to-speech", post(handlers::speech::text_to_speech))
        // Attach state
        .with_state(state)
}
