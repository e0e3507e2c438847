//! Single-turn text generation handler

use ai_core::CompletionRequest;
use axum::{Json, extract::State};
use chrono::Utc;
use domain::{DomainError, build_transcript};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Persona for standalone content generation (no conversation history)
const GENERATE_SYSTEM_PROMPT: &str = "You are a travel content specialist for the Wayfarer \
     platform. Write engaging, accurate travel content: destination descriptions, trip \
     summaries, and marketing copy. Keep the tone inviting and informative.";

const GENERATE_MAX_TOKENS: u32 = 400;
const GENERATE_TEMPERATURE: f32 = 0.8;

/// Generation request body
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Standalone prompt; an absent field is treated as empty and rejected
    #[serde(default)]
    pub prompt: String,
}

/// Generation response body
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    /// Name of the provider that answered
    pub provider: String,
    /// Generated text
    pub text: String,
    /// RFC 3339 timestamp at response time
    pub timestamp: String,
}

/// Handle a generation request
#[instrument(skip(state, request), fields(prompt_len = request.prompt.len()))]
pub async fn generate_text(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if request.prompt.trim().is_empty() {
        return Err(DomainError::empty_prompt().into());
    }

    // Single turn: persona plus the prompt, no history
    let messages = build_transcript(GENERATE_SYSTEM_PROMPT, &[], &request.prompt)?;

    let completion = state
        .router
        .complete(&CompletionRequest::new(
            messages,
            GENERATE_MAX_TOKENS,
            GENERATE_TEMPERATURE,
        ))
        .await?;

    Ok(Json(GenerateResponse {
        success: true,
        provider: completion.provider,
        text: completion.text,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
