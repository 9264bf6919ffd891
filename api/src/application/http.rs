pub mod chat;
pub mod health;
pub mod plan;
pub mod recommendation;
pub mod server;
