pub mod chat;
pub mod gateway;
pub mod prompt;
