use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    chat::{
        entities::{ChatMessage, ChatSession, ChatTurn, ContentPart},
        value_objects::SendMessageInput,
    },
    common::entities::app_errors::CoreError,
};

/// Hosted model capable of answering an ordered list of text/image parts
#[cfg_attr(test, mockall::automock)]
pub trait GenerativeModel: Send + Sync {
    fn generate_content(
        &self,
        parts: Vec<ContentPart>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Session-scoped chat history storage
#[cfg_attr(test, mockall::automock)]
pub trait ChatSessionRepository: Send + Sync {
    fn create_session(&self) -> impl Future<Output = Result<ChatSession, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<ChatSession>, CoreError>> + Send;

    /// Appends in order and returns the stored message.
    fn append_message(
        &self,
        session_id: Uuid,
        message: ChatMessage,
    ) -> impl Future<Output = Result<ChatMessage, CoreError>> + Send;

    fn delete_session(&self, session_id: Uuid)
    -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for the health chat assistant
pub trait ChatService: Send + Sync {
    fn create_session(&self) -> impl Future<Output = Result<ChatSession, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<ChatSession, CoreError>> + Send;

    fn send_message(
        &self,
        input: SendMessageInput,
    ) -> impl Future<Output = Result<ChatTurn, CoreError>> + Send;

    fn clear_session(&self, session_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
