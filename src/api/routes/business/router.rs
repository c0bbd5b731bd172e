//! Router for the business API. Everything here is read straight
//! from the catalog loaded at startup.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

async fn business_info(State(state): State<SharedState>) -> Json<public::BusinessProfile> {
    Json(state.catalog.profile.clone())
}

async fn products(State(state): State<SharedState>) -> Json<Vec<public::Product>> {
    Json(state.catalog.products.clone())
}

/// Create the business router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/business-info", get(business_info))
        .route("/products", get(products))
}
