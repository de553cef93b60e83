//! Notes and tags route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::json;

use super::server::SharedState;
use crate::auth::models::non_empty;
use crate::auth::CurrentUser;
use crate::error::Error;
use crate::store::Note;

// Request types

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
}

// Note routes

pub async fn list_notes(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Note>>, Error> {
    let state = state.read().await;
    Ok(Json(state.store.list_notes(user.id).await?))
}

pub async fn list_pinned_notes(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Note>>, Error> {
    let state = state.read().await;
    Ok(Json(state.store.list_pinned_notes(user.id).await?))
}

pub async fn create_note(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Response, Error> {
    let (Some(title), Some(content)) = (non_empty(&req.title), non_empty(&req.content)) else {
        return Err(Error::Validation(
            "Title and content are required".to_string(),
        ));
    };

    let mut state = state.write().await;
    let note = state
        .store
        .create_note(user.id, title, content, &req.tags)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Note created successfully", "note": note })),
    )
        .into_response())
}

pub async fn update_note(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(note_id): Path<i64>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Response, Error> {
    let Some(content) = non_empty(&req.content) else {
        return Err(Error::Validation("Content is required".to_string()));
    };

    let state = state.read().await;
    let Some(note) = state
        .store
        .update_note_content(note_id, user.id, content)
        .await?
    else {
        return Err(Error::NotFound("Note not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Note updated successfully", "note": note })),
    )
        .into_response())
}

pub async fn delete_note(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(note_id): Path<i64>,
) -> Result<Response, Error> {
    let state = state.read().await;
    if !state.store.delete_note(note_id, user.id).await? {
        return Err(Error::NotFound("Note not found".to_string()));
    }

    Ok(Json(json!({ "message": "Note deleted successfully" })).into_response())
}

pub async fn toggle_pin(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(note_id): Path<i64>,
) -> Result<Response, Error> {
    let state = state.read().await;
    let Some(pinned) = state.store.toggle_pin(note_id, user.id).await? else {
        return Err(Error::NotFound("Note not found".to_string()));
    };

    Ok(Json(json!({ "message": "Pin status updated", "pinned": pinned })).into_response())
}

// Tag routes

/// Tags are shared across users, so this endpoint is public like the
/// rest of the unauthenticated surface.
pub async fn list_tags(State(state): State<SharedState>) -> Result<Json<Vec<String>>, Error> {
    let state = state.read().await;
    Ok(Json(state.store.list_tags().await?))
}
