//! Transcript normalization
//!
//! Turns loosely structured client input into the canonical ordered message
//! list every completion provider receives: one system message, the history
//! turns in their original order, then the caller's current input.

use crate::{
    chat_message::ChatMessage, errors::DomainError, history::HistoryEntry,
};

/// Build the canonical transcript for a completion request.
///
/// Invariant: the result starts with exactly one system message and ends with
/// exactly one user message carrying `message`; history occupies the interior
/// unchanged. No reordering, deduplication, or length cap is applied.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] when `message` is blank. Callers must
/// check this before any network activity.
pub fn build_transcript(
    system_prompt: &str,
    history: &[HistoryEntry],
    message: &str,
) -> Result<Vec<ChatMessage>, DomainError> {
    if message.trim().is_empty() {
        return Err(DomainError::empty_message());
    }

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history.iter().map(ChatMessage::from));
    messages.push(ChatMessage::user(message));
    Ok(messages)
}
