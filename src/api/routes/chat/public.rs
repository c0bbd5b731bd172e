//! Public types for the chat API
use serde::{Deserialize, Serialize};

pub use crate::ai::chat::ChatReply as ChatResponse;

#[derive(Deserialize, Serialize, Debug)]
pub struct ChatRequest {
    // A missing message is treated the same as an empty one
    #[serde(default)]
    pub message: String,
    pub user_id: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ResetChatRequest {
    pub user_id: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ResetChatResponse {
    pub message: String,
}

impl ResetChatResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}
