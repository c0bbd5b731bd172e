mod models;
mod service;
mod session;

pub use models::{Message, Role, Transcript};
pub use service::{ChatError, ChatReply, ChatService, EMPTY_MESSAGE_ERROR, SERVICE_ERROR};
pub use session::{
    ConversationSession, DEFAULT_USER_KEY, SessionHandle, SessionStore, normalize_user_key,
};
