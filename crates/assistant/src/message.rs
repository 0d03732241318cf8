//! Conversation types accepted by the chat endpoint.

use serde::{Deserialize, Serialize};

/// Author of a message.
///
/// Unrecognised role strings deserialize to [`Role::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
    #[serde(other)]
    Other,
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Client-assigned message id
    pub id: String,

    /// Who wrote the message
    pub role: Role,

    /// Message text
    pub content: String,

    /// Client timestamp in milliseconds
    pub timestamp: i64,
}

impl Message {
    /// Create a message.
    pub fn new(
        id: impl Into<String>,
        role: Role,
        content: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            timestamp,
        }
    }

    /// Create a user message with id `"1"` and timestamp 0.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("1", Role::User, content, 0)
    }
}

/// Body of `POST /api/chat`: the conversation so far, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}
