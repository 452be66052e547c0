//! String HTTP Routes
//!
//! Endpoints for creating, looking up, listing and deleting analyzed strings.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::analyzer::AnalyzedRecord;
use crate::query::{FilteredList, InterpretedList};
use crate::service::{ServiceError, ServiceResult, StringService};

// ==================
// Shared State
// ==================

/// String state shared across handlers
pub struct StringsState {
    pub service: StringService,
}

impl StringsState {
    pub fn new(service: StringService) -> Self {
        Self { service }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageQuery {
    #[serde(default)]
    pub query: Option<String>,
}

// ==================
// String Routes
// ==================

/// Create string routes
pub fn string_routes(state: Arc<StringsState>) -> Router {
    Router::new()
        .route("/strings", get(list_strings).post(create_string))
        .route(
            "/strings/filter-by-natural-language",
            get(filter_by_natural_language),
        )
        .route("/strings/:value", get(get_string).delete(delete_string))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_string(
    State(state): State<Arc<StringsState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ServiceResult<(StatusCode, Json<AnalyzedRecord>)> {
    let Json(body) = body.map_err(|e| ServiceError::MalformedBody(e.body_text()))?;
    let record = state.service.create(&body)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_strings(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ServiceResult<Json<FilteredList>> {
    Ok(Json(state.service.list(&params)?))
}

async fn filter_by_natural_language(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<NaturalLanguageQuery>,
) -> ServiceResult<Json<InterpretedList>> {
    let query = params.query.unwrap_or_default();
    Ok(Json(state.service.list_natural(&query)?))
}

async fn get_string(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> ServiceResult<Json<AnalyzedRecord>> {
    Ok(Json(state.service.get_by_value(&value)?))
}

async fn delete_string(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> ServiceResult<StatusCode> {
    state.service.delete_by_value(&value)?;
    Ok(StatusCode::NO_CONTENT)
}
