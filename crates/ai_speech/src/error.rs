//! Speech synthesis errors

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// No credential is present for the speech provider
    #[error("Speech provider not configured")]
    NotConfigured,

    /// Failed to connect to the speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the speech service failed in transit
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Synthesis rejected or failed upstream
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Audio body could not be read
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider did not answer within the configured timeout
    #[error("Speech synthesis timeout after {0}ms")]
    Timeout(u64),
}

impl From<reqwest::Error> for SpeechError {
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
    fn not_configured_error_message() {
        assert_eq!(
            SpeechError::NotConfigured.to_string(),
            "Speech provider not configured"
        );
    }

    #[test]
    fn synthesis_failed_error_message() {
        let err = SpeechError::SynthesisFailed("invalid voice".to_string());
        assert_eq!(err.to_string(), "Synthesis failed: invalid voice");
    }

    #[test]
    fn timeout_error_message() {
        let err = SpeechError::Timeout(30_000);
        assert_eq!(err.to_string(), "Speech synthesis timeout after 30000ms");
    }
}
