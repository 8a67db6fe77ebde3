//! Event submission and moderation endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::{AppError, MessageResponse};
use crate::api::state::AppState;
use crate::store::EventStore;
use crate::types::{EventRecord, EventSubmission, ModerationRequest};

/// Response for POST /events
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub event: EventRecord,
}

/// GET /events - Both collections
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EventStore>, AppError> {
    Ok(Json(state.controller.snapshot()?))
}

/// POST /events - Submit a new event as pending
pub async fn submit_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EventSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let Json(submission) = payload?;
    let event = state.controller.submit(&submission)?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Event submitted successfully".to_string(),
            event,
        }),
    ))
}

/// PUT /events - Apply a lifecycle action
pub async fn moderate_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ModerationRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    let (action, _record) = state.controller.moderate(&request)?;

    Ok(Json(MessageResponse::new(action.success_message())))
}

/// GET /events/:slug - Approved event by slug
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<EventRecord>, AppError> {
    Ok(Json(state.controller.find_approved_by_slug(&slug)?))
}
