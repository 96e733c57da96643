//! Axum route handlers for the resume API.
//!
//! The CRUD handlers are generic over the record type and are mounted once
//! per section in `routes::build_router`.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::resume::Experience;
use crate::resume::spellcheck::{spellcheck, SpellCorrection};
use crate::resume::store::Section;
use crate::resume::suggestions::suggest_improvements;
use crate::resume::validation::validate_record;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn not_found<T: Section>() -> AppError {
    AppError::NotFound(format!("{} not found", T::SECTION))
}

/// Parses an identifier path segment. Anything that is not an integer can
/// never address a record, so it is reported like an out-of-range id.
fn parse_id<T: Section>(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| not_found::<T>())
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(v)| v)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e.body_text())))
}

// ────────────────────────────────────────────────────────────────────────────
// CRUD handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /resume/{section}
pub async fn handle_list<T: Section>(State(state): State<AppState>) -> Json<Vec<T>> {
    Json(state.store.section::<T>().list().to_vec())
}

/// POST /resume/{section}
pub async fn handle_create<T: Section>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let record: T = validate_record(&json_body(body)?)?;
    let id = state.store.section::<T>().push(record);
    info!("{} created at index {id}", T::SECTION);
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_string() }),
    ))
}

/// GET /resume/{section}/:id
pub async fn handle_get<T: Section>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<T>, AppError> {
    let id = parse_id::<T>(&id)?;
    let section = state.store.section::<T>();
    let record = section.get(id).ok_or_else(not_found::<T>)?;
    Ok(Json(record.clone()))
}

/// PUT /resume/{section}/:id
///
/// Replaces the whole record. The id is checked before the payload, so an
/// out-of-range id is a 404 even when the payload is also invalid.
pub async fn handle_replace<T: Section>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<T>, AppError> {
    let id = parse_id::<T>(&id)?;
    if state.store.section::<T>().get(id).is_none() {
        return Err(not_found::<T>());
    }

    let record: T = validate_record(&json_body(body)?)?;

    // The length may have changed since the check above, so replace re-checks bounds.
    let mut section = state.store.section::<T>();
    let updated = section.replace(id, record).ok_or_else(not_found::<T>)?;
    info!("{} {id} replaced", T::SECTION);
    Ok(Json(updated.clone()))
}

/// DELETE /resume/{section}/:id
pub async fn handle_delete<T: Section>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse<T>>, AppError> {
    let id = parse_id::<T>(&id)?;
    let removed = state
        .store
        .section::<T>()
        .remove(id)
        .ok_or_else(not_found::<T>)?;
    info!("{} {id} deleted; later ids shifted down", T::SECTION);
    Ok(Json(DeletedResponse {
        message: format!("{} deleted", T::SECTION),
        data: removed,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Read-only passes
// ────────────────────────────────────────────────────────────────────────────

/// GET /resume/
///
/// Dictionary lookups are CPU-bound, so the pass runs on the blocking pool
/// over a snapshot of the store.
pub async fn handle_spellcheck(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpellCorrection>>, AppError> {
    let snapshot = state.store.snapshot();
    let dictionary = Arc::clone(&state.dictionary);
    let corrections =
        tokio::task::spawn_blocking(move || spellcheck(&snapshot, dictionary.as_ref()))
            .await
            .context("spellcheck task failed")?;
    debug!("Spellcheck found {} corrections", corrections.len());
    Ok(Json(corrections))
}

/// GET /resume/experience/:id/suggestions
///
/// An out-of-range id is rejected before the generation service is contacted.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let id = parse_id::<Experience>(&id)?;
    let description = state
        .store
        .section::<Experience>()
        .get(id)
        .map(|exp| exp.description.clone())
        .ok_or_else(not_found::<Experience>)?;

    let suggestions = suggest_improvements(state.suggester.as_ref(), &description).await;
    if suggestions.is_empty() {
        return Err(AppError::Llm(format!(
            "no suggestions generated for experience {id}"
        )));
    }

    Ok(Json(SuggestionsResponse { suggestions }))
}
