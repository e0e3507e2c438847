//! Application state shared across handlers

use std::{sync::Arc, time::Instant};

use ai_core::CompletionRouter;
use ai_speech::TextToSpeech;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Completion router with the configured fallback chain
    pub router: Arc<CompletionRouter>,
    /// Speech synthesis provider
    pub speech: Arc<dyn TextToSpeech>,
    /// Server start time, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Assemble the state from its services
    pub fn new(router: Arc<CompletionRouter>, speech: Arc<dyn TextToSpeech>) -> Self {
        Self {
            router,
            speech,
            started_at: Instant::now(),
        }
    }
}
