use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 60 * 60;

#[derive(Clone, Debug)]
pub struct FerrisFitConfig {
    pub llm: LLMConfig,
    pub chat: ChatConfig,
}

#[derive(Clone, Debug)]
pub struct ChatConfig {
    /// Seconds without activity before a chat session is forgotten.
    pub session_idle_ttl_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            session_idle_ttl_secs: DEFAULT_SESSION_IDLE_TTL_SECS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl LLMConfig {
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Fails when the API key is absent, so a misconfigured process stops at
    /// startup instead of on the first chat message.
    pub fn ensure_credentials(&self) -> Result<(), CoreError> {
        if self.gemini_api_key.trim().is_empty() {
            return Err(CoreError::MissingCredential(
                "GOOGLE_API_KEY is not set".to_string(),
            ));
        }

        if self.gemini_model.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "gemini model name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
