//! OpenAI speech provider
//!
//! Implements `TextToSpeech` against `POST {base}/audio/speech`. The audio
//! bytes are passed through untransformed; there is no fallback vendor.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    config::SpeechConfig, error::SpeechError, ports::TextToSpeech, types::AudioData,
};

/// OpenAI text-to-speech provider
#[derive(Debug, Clone)]
pub struct OpenAiTtsProvider {
    client: Client,
    config: SpeechConfig,
}

impl OpenAiTtsProvider {
    /// Create a new provider.
    ///
    /// A missing credential is legal here; calls will fail with
    /// [`SpeechError::NotConfigured`] instead.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url.trim_end_matches('/'))
    }
}

/// Wire body for the speech endpoint
#[derive(Debug, Serialize)]
struct SpeechApiRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

#[async_trait]
impl TextToSpeech for OpenAiTtsProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = %self.config.voice))]
    async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(SpeechError::NotConfigured);
        };

        let body = SpeechApiRequest {
            model: &self.config.tts_model,
            voice: &self.config.voice,
            input: text,
        };

        debug!("Sending speech synthesis request");

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Speech synthesis failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let audio_bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        Ok(AudioData::new(audio_bytes))
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }
}
