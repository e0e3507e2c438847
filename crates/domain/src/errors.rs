//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Required input was missing or blank
    #[error("{0} is required.")]
    EmptyInput(&'static str),
}

impl DomainError {
    /// Missing chat message
    pub const fn empty_message() -> Self {
        Self::EmptyInput("Message")
    }

    /// Missing generation prompt
    pub const fn empty_prompt() -> Self {
        Self::EmptyInput("Prompt")
    }

    /// Missing synthesis text
    pub const fn empty_text() -> Self {
        Self::EmptyInput("Text")
    }
}
