//! Client-supplied conversation history

use serde::{Deserialize, Serialize};

use crate::chat_message::ChatMessage;

/// One prior turn as the web client stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Message text
    pub text: String,
    /// True when the user wrote this turn, false for the assistant
    #[serde(rename = "isUser")]
    pub is_user: bool,
}

impl HistoryEntry {
    /// Create a user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    /// Create an assistant turn
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

impl From<&HistoryEntry> for ChatMessage {
    fn from(entry: &HistoryEntry) -> Self {
        if entry.is_user {
            Self::user(&entry.text)
        } else {
            Self::assistant(&entry.text)
        }
    }
}
