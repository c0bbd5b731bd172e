//! Router for the chat API

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    routing::post,
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Send a message to the user's conversation and return the reply
async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::ChatRequest>, JsonRejection>,
) -> Result<Json<public::ChatResponse>, ApiError> {
    let Json(payload) = payload?;
    let reply = state
        .chat
        .handle_chat(payload.user_id.as_deref(), &payload.message)
        .await?;
    Ok(Json(reply))
}

/// Forget the user's conversation so the next message starts over.
/// An empty body resets the default conversation.
async fn reset_chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<public::ResetChatResponse>, ApiError> {
    let payload: public::ResetChatRequest = if body.trim_ascii().is_empty() {
        public::ResetChatRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };
    state.chat.reset(payload.user_id.as_deref()).await;
    Ok(Json(public::ResetChatResponse::new("Chat reset successfully")))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/reset-chat", post(reset_chat_handler))
}
