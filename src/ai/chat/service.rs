use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;

use super::session::{SessionStore, normalize_user_key};
use crate::ai::gateway::SharedGateway;
use crate::ai::prompt::build_system_prompt;
use crate::core::BusinessProfile;

pub const EMPTY_MESSAGE_ERROR: &str = "Message cannot be empty";
pub const SERVICE_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ChatError {
    /// The request can be fixed by the caller
    #[error("{0}")]
    Validation(String),
    /// The model or the server failed. Displays only the generic
    /// message; the cause is for logs.
    #[error("{}", SERVICE_ERROR)]
    Service(anyhow::Error),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub business_name: String,
}

/// Turns a user message into a model reply for that user's
/// conversation.
pub struct ChatService {
    store: SessionStore,
    business_name: String,
}

impl ChatService {
    pub fn new(store: SessionStore, business_name: &str) -> Self {
        Self {
            store,
            business_name: business_name.to_string(),
        }
    }

    /// Build a service whose sessions are primed with the prompt
    /// generated from `profile`.
    pub fn for_profile(
        profile: &BusinessProfile,
        gateway: SharedGateway,
        timeout: Duration,
    ) -> Result<Self> {
        let system_prompt = build_system_prompt(profile)?;
        let store = SessionStore::new(gateway, &system_prompt, timeout);
        Ok(Self::new(store, &profile.name))
    }

    pub async fn handle_chat(
        &self,
        user_key: Option<&str>,
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::Validation(EMPTY_MESSAGE_ERROR.to_string()));
        }

        let user_key = normalize_user_key(user_key);
        self.reply(user_key, message).await.map_err(|e| {
            tracing::error!(
                "Chat error for {}: {:#}. Root cause: {}",
                user_key,
                e,
                e.root_cause()
            );
            ChatError::Service(e)
        })
    }

    async fn reply(&self, user_key: &str, message: &str) -> Result<ChatReply> {
        let session = self.store.get_or_create(user_key).await?;
        let response = session.lock().await.send_message(message).await?;

        Ok(ChatReply {
            response,
            business_name: self.business_name.clone(),
        })
    }

    pub async fn reset(&self, user_key: Option<&str>) {
        self.store.reset(normalize_user_key(user_key)).await;
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }
}
