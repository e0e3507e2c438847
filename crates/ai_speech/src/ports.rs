//! Port definitions for speech synthesis

use async_trait::async_trait;

use crate::{error::SpeechError, types::AudioData};

/// Port for text-to-speech implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech for the given text.
    ///
    /// # Errors
    ///
    /// [`SpeechError::NotConfigured`] when no credential is present (no
    /// network call is made); any transport or upstream failure otherwise.
    async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError>;

    /// Whether the provider holds a credential and may be called
    fn is_configured(&self) -> bool;
}
