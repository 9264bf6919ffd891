pub mod chat_session_repository;

pub use chat_session_repository::InMemoryChatSessionRepository;
