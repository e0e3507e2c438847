//! Completion errors

use thiserror::Error;

/// Errors that can occur while obtaining a completion
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No provider holds a credential; nothing can be attempted
    #[error("No AI provider configured. Set OPENAI_API_KEY or OPENROUTER_API_KEY.")]
    NoProviderConfigured,

    /// Failed to connect to a provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to a provider failed in transit
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider did not answer within the configured timeout
    #[error("Completion timeout after {0}ms")]
    Timeout(u64),

    /// Provider answered with a non-success status
    #[error("Upstream status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Provider body could not be parsed as JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Every configured provider failed; carries the final provider's error
    #[error("All providers failed; last error from {provider}: {detail}")]
    Exhausted { provider: String, detail: String },
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30_000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_provider_error_names_the_env_keys() {
        let msg = CompletionError::NoProviderConfigured.to_string();
        assert!(msg.contains("OPENAI_API_KEY"));
        assert!(msg.contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn upstream_status_error_message() {
        let err = CompletionError::UpstreamStatus {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream status 502: bad gateway");
    }

    #[test]
    fn timeout_error_message() {
        let err = CompletionError::Timeout(30_000);
        assert_eq!(err.to_string(), "Completion timeout after 30000ms");
    }

    #[test]
    fn exhausted_error_carries_provider_and_detail() {
        let err = CompletionError::Exhausted {
            provider: "openrouter".to_string(),
            detail: "Upstream status 500: boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("openrouter"));
        assert!(msg.contains("boom"));
    }
}
