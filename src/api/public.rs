//! Public API types

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::ai::chat::{ChatError, SERVICE_ERROR};

// Errors

pub const INVALID_BODY_ERROR: &str = "Invalid request body";

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub enum ApiError {
    /// Client error, the message is returned as is
    BadRequest(String),
    /// The request body couldn't be read. Only the status reaches the
    /// client, the parser's detail is logged.
    InvalidBody(StatusCode, String),
    /// Failure whose cause was already logged where it happened
    Service,
    Internal(anyhow::Error),
}

/// Convert `ApiError` into an Axum compatible response. Internal
/// details never reach the client.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidBody(status, detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                (status, INVALID_BODY_ERROR.to_string())
            }
            ApiError::Service => (StatusCode::INTERNAL_SERVER_ERROR, SERVICE_ERROR.to_string()),
            ApiError::Internal(e) => {
                tracing::error!("{:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVICE_ERROR.to_string())
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Validation(msg) => Self::BadRequest(msg),
            ChatError::Service(_) => Self::Service,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.status(), rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(StatusCode::BAD_REQUEST, err.to_string())
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

// Re-export public types from each route

pub mod business {
    pub use crate::api::routes::business::public::*;
}

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}
