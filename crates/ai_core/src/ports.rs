//! Port definitions for completion providers

use async_trait::async_trait;
use domain::ChatMessage;
use serde_json::Value;

use crate::error::CompletionError;

/// A normalized completion request, ready for any provider
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Canonical ordered transcript (system first, current input last)
    pub messages: Vec<ChatMessage>,
    /// Generation cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a request from an already-normalized transcript
    pub const fn new(messages: Vec<ChatMessage>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            messages,
            max_tokens,
            temperature,
        }
    }
}

/// Result of one successful completion call
#[derive(Debug, Clone)]
pub struct Completion {
    /// Name of the provider that answered
    pub provider: String,
    /// Text extracted from the upstream body
    pub text: String,
    /// Raw upstream JSON, kept for diagnostics
    pub raw: Value,
}

/// Port for one upstream completion provider
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Stable provider name for responses and logs
    fn name(&self) -> &str;

    /// Issue one completion call and return the raw upstream JSON.
    ///
    /// The call must be bounded by the provider's configured timeout.
    async fn complete(&self, request: &CompletionRequest) -> Result<Value, CompletionError>;
}
