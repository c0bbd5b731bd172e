//! Per-user conversations and the store that owns them.
//!
//! Each user key maps to at most one primed conversation. Creation is
//! single-flight per key: concurrent first requests wait on the same
//! priming call and share its result. Messages within one session are
//! serialized by the session's own lock, in no guaranteed order.
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, OnceCell};
use uuid::Uuid;

use super::models::{Message, Role, Transcript};
use crate::ai::gateway::SharedGateway;

/// Shared key for callers that don't identify themselves. Everyone
/// without a `user_id` talks in the same conversation.
pub const DEFAULT_USER_KEY: &str = "default_user";

/// Collapse a missing or empty user key to `DEFAULT_USER_KEY`.
pub fn normalize_user_key(user_key: Option<&str>) -> &str {
    match user_key {
        Some(key) if !key.is_empty() => key,
        _ => DEFAULT_USER_KEY,
    }
}

pub struct ConversationSession {
    pub id: Uuid,
    pub user_key: String,
    pub created_at: DateTime<Utc>,
    last_active: Instant,
    transcript: Transcript,
    gateway: SharedGateway,
    timeout: Duration,
}

impl ConversationSession {
    /// Open a conversation by sending the system prompt as its first
    /// message. Nothing is returned if the model doesn't answer.
    async fn prime(
        user_key: &str,
        system_prompt: &str,
        gateway: SharedGateway,
        timeout: Duration,
    ) -> Result<Self> {
        let mut session = Self {
            id: Uuid::new_v4(),
            user_key: user_key.to_string(),
            created_at: Utc::now(),
            last_active: Instant::now(),
            transcript: Transcript::new(),
            gateway,
            timeout,
        };
        session
            .exchange(Message::new(Role::System, system_prompt))
            .await?;
        Ok(session)
    }

    /// Send a user message and return the model's reply. The
    /// transcript only changes if the model replies in time.
    pub async fn send_message(&mut self, text: &str) -> Result<String> {
        self.exchange(Message::new(Role::User, text)).await
    }

    async fn exchange(&mut self, msg: Message) -> Result<String> {
        let history = self.transcript.with_pending(msg.clone());
        let reply = tokio::time::timeout(self.timeout, self.gateway.complete(&history))
            .await
            .map_err(|_| anyhow!("Model gateway timed out after {:?}", self.timeout))??;

        self.transcript.push(msg);
        self.transcript.push(Message::new(Role::Model, &reply));
        self.last_active = Instant::now();

        Ok(reply)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }
}

pub type SessionHandle = Arc<Mutex<ConversationSession>>;

// Empty until priming succeeds. A failed priming leaves the cell empty
// so the next request for the key tries again.
type SessionCell = Arc<OnceCell<SessionHandle>>;

pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionCell>>,
    gateway: SharedGateway,
    system_prompt: String,
    timeout: Duration,
}

impl SessionStore {
    pub fn new(gateway: SharedGateway, system_prompt: &str, timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            gateway,
            system_prompt: system_prompt.to_string(),
            timeout,
        }
    }

    /// Return the session for `user_key`, priming a new one if there
    /// isn't one yet.
    pub async fn get_or_create(&self, user_key: &str) -> Result<SessionHandle> {
        let cell = {
            let mut sessions = self.sessions.lock().await;
            Arc::clone(sessions.entry(user_key.to_string()).or_default())
        };

        let primed = cell
            .get_or_try_init(|| async {
                tracing::debug!("Priming new chat session for {}", user_key);
                let session = ConversationSession::prime(
                    user_key,
                    &self.system_prompt,
                    Arc::clone(&self.gateway),
                    self.timeout,
                )
                .await?;
                tracing::debug!("Created chat session {} for {}", session.id, user_key);
                Ok::<_, anyhow::Error>(Arc::new(Mutex::new(session)))
            })
            .await;

        match primed {
            Ok(handle) => Ok(Arc::clone(handle)),
            Err(e) => {
                self.forget_unprimed(user_key, &cell).await;
                Err(e)
            }
        }
    }

    // Drop the map entry for a cell whose priming failed, unless a reset
    // already replaced it or another caller is still waiting to retry.
    async fn forget_unprimed(&self, user_key: &str, cell: &SessionCell) {
        let mut sessions = self.sessions.lock().await;
        let is_same_cell = sessions
            .get(user_key)
            .is_some_and(|current| Arc::ptr_eq(current, cell));
        // One reference in the map and one held by the caller
        if is_same_cell && !cell.initialized() && Arc::strong_count(cell) == 2 {
            sessions.remove(user_key);
        }
    }

    /// Forget the session for `user_key`. Returns whether one existed;
    /// resetting an unknown key is not an error.
    pub async fn reset(&self, user_key: &str) -> bool {
        let removed = self.sessions.lock().await.remove(user_key);
        let existed = removed.is_some_and(|cell| cell.initialized());
        if existed {
            tracing::debug!("Reset chat session for {}", user_key);
        }
        existed
    }

    pub async fn contains(&self, user_key: &str) -> bool {
        self.sessions
            .lock()
            .await
            .get(user_key)
            .is_some_and(|cell| cell.initialized())
    }

    /// Number of primed sessions
    pub async fn len(&self) -> usize {
        self.sessions
            .lock()
            .await
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop sessions that haven't exchanged a message for at least
    /// `ttl`. A session is in use, and skipped, while anyone outside the
    /// store holds its cell or handle, even before they lock it.
    /// Unprimed entries nobody is waiting on are dropped too. Returns
    /// the number of entries removed.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|user_key, cell| {
            if Arc::strong_count(cell) > 1 {
                return true;
            }
            let Some(handle) = cell.get() else {
                return false;
            };
            if Arc::strong_count(handle) > 1 {
                return true;
            }
            match handle.try_lock() {
                Ok(session) if session.idle_for() >= ttl => {
                    tracing::debug!(
                        "Evicting idle chat session {} for {} created at {}",
                        session.id,
                        user_key,
                        session.created_at
                    );
                    false
                }
                _ => true,
            }
        });
        before - sessions.len()
    }
}
