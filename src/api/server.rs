use std::sync::Arc;

use anyhow::Result;
use axum::middleware;
use axum::{Router, extract::Request, response::Response};
use http::{HeaderValue, header};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::ai::gateway::gateway_from_config;
use crate::api::state::AppState;
use crate::core::{AppConfig, BusinessCatalog, init_tracing};
use crate::jobs::{EvictIdleSessions, spawn_periodic_job};

async fn set_static_cache_control(request: Request, next: middleware::Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

pub fn app(shared_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::permissive();
    let static_path = shared_state.config.static_path.clone();

    Router::new()
        // API routes
        .nest("/api", routes::router())
        // HTML pages
        .merge(routes::pages::router())
        // Static assets for the pages
        .fallback_service(
            ServiceBuilder::new()
                .layer(middleware::from_fn(set_static_cache_control))
                .service(ServeDir::new(static_path)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    init_tracing();

    let catalog = BusinessCatalog::load(config.business_profile_path.as_deref())?;
    let gateway = gateway_from_config(&config);
    let session_idle_ttl = config.session_idle_ttl;
    let shared_state = Arc::new(AppState::new(config, catalog, gateway)?);
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

    tracing::info!(
        "Starting {} chatbot server. Listening on {}",
        shared_state.catalog.profile.name,
        listener.local_addr()?
    );

    // Without a TTL sessions live until the process exits
    match session_idle_ttl {
        Some(ttl) => {
            spawn_periodic_job(Arc::clone(&shared_state), EvictIdleSessions { ttl });
        }
        None => tracing::debug!("Idle chat session eviction is disabled"),
    }

    axum::serve(listener, app).await?;

    Ok(())
}
