//! Router for the HTML pages

use std::sync::Arc;

use axum::{Router, extract::State, response::Html, routing::get};

use super::templates::{Page, render_page};
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

fn render(state: &AppState, page: Page) -> Result<Html<String>, ApiError> {
    let html = render_page(&state.pages, page, &state.catalog)?;
    Ok(Html(html))
}

async fn home(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    render(&state, Page::Home)
}

async fn about(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    render(&state, Page::About)
}

async fn services(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    render(&state, Page::Services)
}

async fn contact(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    render(&state, Page::Contact)
}

/// Create the pages router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/contact", get(contact))
}
