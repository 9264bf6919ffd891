pub mod anthropometry;
pub mod chat;
pub mod common;
pub mod plan;
pub mod progress;
pub mod recommendation;
