use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    /// Set on assistant messages standing in for a failed model call.
    pub failed: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: String, failed: bool) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            role,
            content,
            failed,
            created_at: now,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content.into(), false)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content.into(), false)
    }

    pub fn assistant_failure(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content.into(), true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            created_at: now,
            messages: Vec::new(),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// An uploaded picture forwarded to the model as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One element of the ordered part list sent to the generative model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    Image(ChatImage),
}

/// The pair of messages appended to the history by one chat submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub session_id: Uuid,
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
}
