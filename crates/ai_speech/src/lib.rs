//! Speech synthesis for the Wayfarer gateway
//!
//! A single-provider binary-audio passthrough. Unlike completions there is
//! no fallback chain: one vendor is wired for speech, and when it is not
//! usable the operation resolves to a service-unavailable outcome.

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::OpenAiTtsProvider;
pub use types::AudioData;
