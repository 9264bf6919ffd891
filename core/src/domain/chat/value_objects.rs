use uuid::Uuid;

use crate::domain::chat::entities::ChatImage;

#[derive(Debug, Clone, Default)]
pub struct ChatInput {
    pub text: Option<String>,
    pub image: Option<ChatImage>,
}

impl ChatInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image: None,
        }
    }

    /// The text as typed, or `None` when it is absent or only whitespace.
    pub fn message_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct SendMessageInput {
    pub session_id: Uuid,
    pub input: ChatInput,
}
