pub mod chat;
pub mod llm;
