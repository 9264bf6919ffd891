use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    chat::{
        entities::{ChatMessage, ChatSession, ChatTurn, ContentPart},
        policies::ensure_supported_image,
        ports::{ChatService, ChatSessionRepository, GenerativeModel},
        value_objects::{ChatInput, SendMessageInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
};

/// Sent alongside every uploaded image, never with text-only messages.
pub const IMAGE_INSTRUCTION: &str = "You are a health assistant. If food → give calories, protein, fiber, benefits. If exercise → identify and explain muscles, posture, benefits.";

/// Shown in the history when the user sends an image without text.
pub const IMAGE_ONLY_PLACEHOLDER: &str = "📸 Analyzing uploaded image...";

pub const ASSISTANT_UNAVAILABLE: &str =
    "Sorry, the health assistant could not answer right now. Please try again in a moment.";

/// Fails when there is nothing to send or the image cannot be forwarded.
fn ensure_sendable(input: &ChatInput) -> Result<(), CoreError> {
    match (&input.image, input.message_text()) {
        (Some(image), _) => ensure_supported_image(&image.mime_type, image.data.len()),
        (None, Some(_)) => Ok(()),
        (None, None) => Err(CoreError::InvalidInput(
            "a chat message needs text or an image".to_string(),
        )),
    }
}

/// Ordered parts for the model: optional text, then the image, then the instruction.
pub fn build_request_parts(input: &ChatInput) -> Result<Vec<ContentPart>, CoreError> {
    ensure_sendable(input)?;

    let mut parts: Vec<ContentPart> = input
        .message_text()
        .map(|text| ContentPart::Text(text.to_string()))
        .into_iter()
        .collect();

    if let Some(image) = &input.image {
        parts.push(ContentPart::Image(image.clone()));
        parts.push(ContentPart::Text(IMAGE_INSTRUCTION.to_string()));
    }

    Ok(parts)
}

/// What the user sees for their own message in the history.
pub fn user_message_content(input: &ChatInput) -> String {
    match input.message_text() {
        Some(text) => text.to_string(),
        None => IMAGE_ONLY_PLACEHOLDER.to_string(),
    }
}

/// Forwards one message to the model and returns its answer unmodified.
pub async fn relay<M: GenerativeModel>(model: &M, input: &ChatInput) -> Result<String, CoreError> {
    let parts = build_request_parts(input)?;
    model.generate_content(parts).await
}

impl<LLM, CS> ChatService for Service<LLM, CS>
where
    LLM: GenerativeModel,
    CS: ChatSessionRepository,
{
    async fn create_session(&self) -> Result<ChatSession, CoreError> {
        let session = self.chat_session_repository.create_session().await?;
        info!(session_id = %session.id, "chat session created");

        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<ChatSession, CoreError> {
        self.chat_session_repository
            .get_session(session_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id))]
    async fn send_message(&self, input: SendMessageInput) -> Result<ChatTurn, CoreError> {
        // Reject bad input before the history is touched.
        ensure_sendable(&input.input)?;

        self.chat_session_repository
            .get_session(input.session_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let user_message = self
            .chat_session_repository
            .append_message(
                input.session_id,
                ChatMessage::user(user_message_content(&input.input)),
            )
            .await?;

        let reply = match relay(self.llm_client.as_ref(), &input.input).await {
            Ok(text) => ChatMessage::assistant(text),
            Err(e) => {
                error!("Health assistant call failed: {}", e);
                ChatMessage::assistant_failure(ASSISTANT_UNAVAILABLE)
            }
        };

        let assistant_message = self
            .chat_session_repository
            .append_message(input.session_id, reply)
            .await?;

        Ok(ChatTurn {
            session_id: input.session_id,
            user_message,
            assistant_message,
        })
    }

    async fn clear_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        if self
            .chat_session_repository
            .delete_session(session_id)
            .await?
        {
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }
}
