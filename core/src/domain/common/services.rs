use std::sync::Arc;

use crate::domain::chat::ports::{ChatSessionRepository, GenerativeModel};

/// Application service holding the adapters behind every domain port.
pub struct Service<LLM, CS>
where
    LLM: GenerativeModel,
    CS: ChatSessionRepository,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) chat_session_repository: Arc<CS>,
}

impl<LLM, CS> Service<LLM, CS>
where
    LLM: GenerativeModel,
    CS: ChatSessionRepository,
{
    pub fn new(llm_client: LLM, chat_session_repository: CS) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            chat_session_repository: Arc::new(chat_session_repository),
        }
    }
}

impl<LLM, CS> Clone for Service<LLM, CS>
where
    LLM: GenerativeModel,
    CS: ChatSessionRepository,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            chat_session_repository: Arc::clone(&self.chat_session_repository),
        }
    }
}
