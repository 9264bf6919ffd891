use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{sync::RwLock, time::Instant};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    chat::{
        entities::{ChatMessage, ChatSession},
        ports::ChatSessionRepository,
    },
    common::{DEFAULT_SESSION_IDLE_TTL_SECS, entities::app_errors::CoreError},
};

#[derive(Debug, Clone)]
struct StoredSession {
    session: ChatSession,
    last_active: Instant,
}

impl StoredSession {
    fn is_expired(&self, now: Instant, idle_ttl: Duration) -> bool {
        now.duration_since(self.last_active) > idle_ttl
    }
}

/// Process-local session store. A session is dropped once it has been idle
/// for longer than `idle_ttl`, when it is deleted, or when the server stops.
#[derive(Debug, Clone)]
pub struct InMemoryChatSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    idle_ttl: Duration,
}

impl InMemoryChatSessionRepository {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, StoredSession>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_expired(now, self.idle_ttl));

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "idle chat sessions evicted");
        }
    }
}

impl Default for InMemoryChatSessionRepository {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_SESSION_IDLE_TTL_SECS))
    }
}

impl ChatSessionRepository for InMemoryChatSessionRepository {
    async fn create_session(&self) -> Result<ChatSession, CoreError> {
        let now = Instant::now();
        let session = ChatSession::new();

        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);
        sessions.insert(
            session.id,
            StoredSession {
                session: session.clone(),
                last_active: now,
            },
        );

        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Option<ChatSession>, CoreError> {
        let now = Instant::now();

        Ok(self
            .sessions
            .read()
            .await
            .get(&session_id)
            .filter(|stored| !stored.is_expired(now, self.idle_ttl))
            .map(|stored| stored.session.clone()))
    }

    async fn append_message(
        &self,
        session_id: Uuid,
        message: ChatMessage,
    ) -> Result<ChatMessage, CoreError> {
        let now = Instant::now();

        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);

        let stored = sessions.get_mut(&session_id).ok_or(CoreError::NotFound)?;
        stored.session.messages.push(message.clone());
        stored.last_active = now;

        Ok(message)
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<bool, CoreError> {
        Ok(self.sessions.write().await.remove(&session_id).is_some())
    }
}
