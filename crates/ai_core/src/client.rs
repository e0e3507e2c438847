//! OpenAI-compatible chat-completions client
//!
//! Both configured vendors speak the same `POST {base}/chat/completions`
//! wire, so a single reqwest adapter serves either, parameterized by its
//! [`ProviderConfig`].

use std::time::Duration;

use async_trait::async_trait;
use domain::ChatMessage;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    config::ProviderConfig,
    error::CompletionError,
    ports::{CompletionProvider, CompletionRequest},
};

/// HTTP adapter for one OpenAI-compatible provider
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    config: ProviderConfig,
}

impl ChatCompletionsClient {
    /// Create a client for the given provider.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::ConnectionFailed`] when the underlying HTTP
    /// client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| CompletionError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }
}

/// Wire body for the chat-completions endpoint
#[derive(Debug, Serialize)]
struct ChatApiRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[async_trait]
impl CompletionProvider for ChatCompletionsClient {
    fn name(&self) -> &str {
        self.config.kind.name()
    }

    #[instrument(skip(self, request), fields(provider = self.name(), model = %self.config.default_model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<Value, CompletionError> {
        let body = ChatApiRequest {
            model: &self.config.default_model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(messages = request.messages.len(), "Sending completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Completion request failed");
            return Err(CompletionError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        debug!("Completion response received");
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderKind;

    #[test]
    fn completions_url_joins_cleanly() {
        let client = ChatCompletionsClient::new(ProviderConfig::openai()).unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );

        let mut config = ProviderConfig::openrouter();
        config.base_url = "https://api.openrouter.ai/v1/".to_string();
        let client = ChatCompletionsClient::new(config).unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.openrouter.ai/v1/chat/completions"
        );
    }

    #[test]
    fn name_follows_provider_kind() {
        let client = ChatCompletionsClient::new(ProviderConfig::openrouter()).unwrap();
        assert_eq!(client.name(), ProviderKind::OpenRouter.name());
    }

    #[test]
    fn wire_body_serializes_messages_in_order() {
        let messages = domain::build_transcript("sys", &[], "Hi").unwrap();
        let body = ChatApiRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
            max_tokens: 500,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Hi");
    }
}
