//! REST API module for HTTP endpoints
//!
//! - `GET /events` - Pending and approved collections
//! - `POST /events` - Submit a new event for moderation
//! - `PUT /events` - Approve, reject or remove an event
//! - `GET /events/:slug` - Approved event by slug
//! - `GET /festivals` - Built-in festivals merged with approved events
//! - `GET /festivals/:slug` - One catalog entry
//! - `GET /search?q=` - Best catalog match for a search term

pub mod events;
pub mod festivals;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

use crate::error::EventError;

/// API error body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "CONFLICT".to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "Internal server error".to_string(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Message-only success body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A failed request: status plus error body
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ApiError,
}

impl AppError {
    pub fn new(status: StatusCode, body: ApiError) -> Self {
        Self { status, body }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        if !err.is_client_error() {
            // Detail stays in the log
            error!(error = %err, "storage failure");
            return Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiError::internal());
        }

        let message = err.to_string();
        match err {
            EventError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, ApiError::not_found(message))
            }
            EventError::SlugConflict { .. } => {
                warn!(error = %message, "rejected request");
                Self::new(StatusCode::CONFLICT, ApiError::conflict(message))
            }
            _ => {
                warn!(error = %message, "rejected request");
                Self::new(StatusCode::BAD_REQUEST, ApiError::bad_request(message))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "malformed JSON body");
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiError::bad_request(rejection.body_text()),
        )
    }
}
