pub mod entities;
pub mod services;
mod table;

pub use entities::*;
pub use services::*;
