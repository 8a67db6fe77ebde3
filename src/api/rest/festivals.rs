//! Catalog endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::{ApiError, AppError};
use crate::api::state::AppState;
use crate::catalog::{builtin_festivals, merge_catalog, CatalogEntry};
use crate::search::{resolve_exact, search};
use crate::utils::time;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search term as typed by the visitor
    #[serde(default)]
    pub q: String,
}

fn load_catalog(state: &AppState) -> Result<Vec<CatalogEntry>, AppError> {
    let approved = state.controller.approved()?;
    Ok(merge_catalog(builtin_festivals(), &approved, time::today()))
}

fn festival_not_found() -> AppError {
    AppError::new(StatusCode::NOT_FOUND, ApiError::not_found("Festival not found"))
}

/// GET /festivals - Built-in festivals merged with approved events
pub async fn list_festivals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CatalogEntry>>, AppError> {
    Ok(Json(load_catalog(&state)?))
}

/// GET /festivals/:slug - One catalog entry
pub async fn get_festival(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<CatalogEntry>, AppError> {
    let catalog = load_catalog(&state)?;
    resolve_exact(&slug, &catalog)
        .cloned()
        .map(Json)
        .ok_or_else(festival_not_found)
}

/// GET /search - Exact slug match first, then substring match
pub async fn search_festivals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<CatalogEntry>, AppError> {
    if params.q.trim().is_empty() {
        return Err(AppError::new(
            StatusCode::BAD_REQUEST,
            ApiError::bad_request("Query parameter 'q' is required"),
        ));
    }

    let catalog = load_catalog(&state)?;
    search(&params.q, &catalog)
        .cloned()
        .map(Json)
        .ok_or_else(festival_not_found)
}
