//! Text-to-speech handler

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Synthesis request body
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize; an absent field is treated as empty and rejected
    #[serde(default)]
    pub text: String,
}

/// Handle a synthesis request.
///
/// Success responses are binary audio, not JSON; every failure after
/// validation collapses to a 503 with a fixed message.
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn text_to_speech(
    State(state): State<AppState>,
    Json(request): Json<SpeechRequest>,
) -> Result<Response, ApiError> {
    if request.text.trim().is_empty() {
        return Err(DomainError::empty_text().into());
    }

    let audio = state.speech.synthesize(&request.text).await?;

    let headers = [
        (header::CONTENT_TYPE, audio.media_type().to_string()),
        (header::CONTENT_LENGTH, audio.len().to_string()),
    ];

    Ok((headers, audio.into_bytes()).into_response())
}
