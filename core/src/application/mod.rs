use std::time::Duration;

use tracing::info;

use crate::{
    domain::common::{FerrisFitConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{chat::InMemoryChatSessionRepository, llm::GeminiLLMClient},
};

pub type FerrisFitService = Service<GeminiLLMClient, InMemoryChatSessionRepository>;

pub async fn create_service(config: FerrisFitConfig) -> Result<FerrisFitService, CoreError> {
    config.llm.ensure_credentials()?;

    let llm_client = GeminiLLMClient::from_config(&config.llm);
    info!(model = llm_client.model_name(), "Gemini client configured");

    let session_idle_ttl = Duration::from_secs(config.chat.session_idle_ttl_secs);
    info!(?session_idle_ttl, "chat sessions kept in memory");

    Ok(Service::new(
        llm_client,
        InMemoryChatSessionRepository::new(session_idle_ttl),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{ChatConfig, LLMConfig};

    #[tokio::test]
    async fn test_missing_api_key_fails_fast() {
        let config = FerrisFitConfig {
            llm: LLMConfig::new(""),
            chat: ChatConfig::default(),
        };

        assert!(matches!(
            create_service(config).await,
            Err(CoreError::MissingCredential(_))
        ));
    }

    #[tokio::test]
    async fn test_service_is_created_with_key() {
        let config = FerrisFitConfig {
            llm: LLMConfig::new("test-key"),
            chat: ChatConfig::default(),
        };

        assert!(create_service(config).await.is_ok());
    }
}
