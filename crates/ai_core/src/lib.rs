//! Completion core for the Wayfarer gateway
//!
//! Resolves which upstream AI providers are usable, calls them in priority
//! order with automatic failover, and extracts generated text from their
//! heterogeneous response shapes.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod ports;
pub mod router;

pub use client::ChatCompletionsClient;
pub use config::{CompletionConfig, ProviderConfig, ProviderKind};
pub use error::CompletionError;
pub use extract::{ExtractedText, NO_RESPONSE_FALLBACK, extract};
pub use ports::{Completion, CompletionProvider, CompletionRequest};
pub use router::CompletionRouter;
