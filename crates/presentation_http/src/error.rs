//! API error handling
//!
//! Maps gateway failures to the wire contract: validation failures are 400s
//! with a `{success:false, message}` body, speech unavailability is a 503
//! with the same shape, and exhausted completion chains are 500s whose
//! upstream detail is only included outside production.

use ai_core::CompletionError;
use ai_speech::SpeechError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Global flag to control error detail exposure
/// Set to false in production to prevent information leakage
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether upstream error details should be exposed in responses.
///
/// In production environments, this should be set to `false` so terminal
/// provider errors are not forwarded to callers.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// Fixed message for every speech failure surfaced to callers
pub const TTS_UNAVAILABLE_MESSAGE: &str = "TTS unavailable. Configure OPENAI_API_KEY.";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false on the error path
    pub success: bool,
    /// Caller-facing message (validation and availability errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Generic failure label (upstream errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Terminal provider detail, present only when exposure is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    fn with_message(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            error: None,
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::with_message(msg))
            },
            Self::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::with_message(msg),
            ),
            Self::Upstream(detail) => {
                let details = if should_expose_details() {
                    Some(detail)
                } else {
                    None
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: false,
                        message: None,
                        error: Some("AI service failed".to_string()),
                        details,
                    },
                )
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<SpeechError> for ApiError {
    fn from(err: SpeechError) -> Self {
        tracing::warn!(error = %err, "Speech synthesis unavailable");
        Self::ServiceUnavailable(TTS_UNAVAILABLE_MESSAGE.to_string())
    }
}
