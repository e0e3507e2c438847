//! Domain layer for the Wayfarer gateway
//!
//! Contains the chat message model and transcript normalization.
//! This layer has no I/O dependencies and defines the ubiquitous language.

pub mod chat_message;
pub mod errors;
pub mod history;
pub mod transcript;

pub use chat_message::{ChatMessage, MessageRole};
pub use errors::DomainError;
pub use history::HistoryEntry;
pub use transcript::build_transcript;
