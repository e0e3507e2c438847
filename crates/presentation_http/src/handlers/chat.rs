//! Conversational chat handler

use ai_core::CompletionRequest;
use axum::{Json, extract::State};
use chrono::Utc;
use domain::{HistoryEntry, build_transcript};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Persona injected at the head of every chat transcript
const CHAT_SYSTEM_PROMPT: &str = "You are Wayfarer, the AI assistant for a travel management \
     platform. You help travelers with trip analytics, bookings, itinerary questions, and \
     destination recommendations. Be concise, professional, and friendly.";

const CHAT_MAX_TOKENS: u32 = 500;
const CHAT_TEMPERATURE: f32 = 0.7;

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message; an absent field is treated as empty and rejected
    #[serde(default)]
    pub message: String,
    /// Prior turns, oldest first
    #[serde(default, rename = "chatHistory")]
    pub chat_history: Vec<HistoryEntry>,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    /// Name of the provider that answered
    pub provider: String,
    /// Assistant reply text
    pub response: String,
    /// Epoch milliseconds at response time
    #[serde(rename = "messageId")]
    pub message_id: i64,
}

/// Handle a chat request
#[instrument(skip(state, request), fields(message_len = request.message.len(), history_len = request.chat_history.len()))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    // Validation happens before any provider is touched
    let messages = build_transcript(CHAT_SYSTEM_PROMPT, &request.chat_history, &request.message)?;

    let completion = state
        .router
        .complete(&CompletionRequest::new(
            messages,
            CHAT_MAX_TOKENS,
            CHAT_TEMPERATURE,
        ))
        .await?;

    Ok(Json(ChatResponse {
        success: true,
        provider: completion.provider,
        response: completion.text,
        message_id: Utc::now().timestamp_millis(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_deserialize_without_history() {
        let json = r#"{"message": "Hello"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.message, "Hello");
        assert!(request.chat_history.is_empty());
    }

    #[test]
    fn chat_request_deserialize_with_history() {
        let json = r#"{
            "message": "And hotels?",
            "chatHistory": [
                {"text": "Any flights to Lisbon?", "isUser": true},
                {"text": "Several depart daily from your home airport.", "isUser": false}
            ]
        }"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.chat_history.len(), 2);
        assert!(request.chat_history[0].is_user);
        assert!(!request.chat_history[1].is_user);
    }

    #[test]
    fn absent_message_deserializes_as_empty() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.message.is_empty());
        assert!(request.chat_history.is_empty());
    }

    #[test]
    fn snake_case_history_field_is_ignored() {
        let json = r#"{"message": "Hi", "chat_history": []}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        // Unknown fields are ignored; only the camelCase name binds
        assert!(request.chat_history.is_empty());
    }

    #[test]
    fn chat_response_wire_shape() {
        let response = ChatResponse {
            success: true,
            provider: "openai".to_string(),
            response: "Hello, how can I help?".to_string(),
            message_id: 1_724_630_400_000,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""provider":"openai""#));
        assert!(json.contains(r#""messageId":1724630400000"#));
        assert!(!json.contains("message_id"));
    }

    #[test]
    fn transcript_uses_travel_persona() {
        let messages = build_transcript(CHAT_SYSTEM_PROMPT, &[], "Hi").unwrap();
        assert!(messages[0].content.contains("Wayfarer"));
        assert!(messages[0].content.contains("travel"));
    }
}
