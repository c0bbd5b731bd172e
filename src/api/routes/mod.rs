//! API routes module

pub mod business;
pub mod chat;
pub mod pages;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat and reset routes
        .merge(chat::router())
        // Business profile and product catalog
        .merge(business::router())
}
