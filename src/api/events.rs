//! Calendar event route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::server::SharedState;
use crate::auth::models::non_empty;
use crate::auth::CurrentUser;
use crate::error::Error;
use crate::store::CalendarEvent;

// Request types

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Parse an ISO-8601 timestamp, with or without an offset.
///
/// Offset-less values are taken as UTC.
fn parse_event_time(value: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(Error::Validation(
        "Invalid date format. Use ISO format (YYYY-MM-DDTHH:MM:SS)".to_string(),
    ))
}

// Event routes

pub async fn list_events(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<CalendarEvent>>, Error> {
    let state = state.read().await;
    Ok(Json(state.store.list_events(user.id).await?))
}

pub async fn create_event(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, Error> {
    let (Some(title), Some(start), Some(end)) = (
        non_empty(&req.title),
        non_empty(&req.start_time),
        non_empty(&req.end_time),
    ) else {
        return Err(Error::Validation(
            "Title, start time, and end time are required".to_string(),
        ));
    };

    let start_time = parse_event_time(start)?;
    let end_time = parse_event_time(end)?;

    let state = state.read().await;
    let event = state
        .store
        .create_event(user.id, title, req.description.as_deref(), start_time, end_time)
        .await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

pub async fn update_event(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(event_id): Path<i64>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, Error> {
    let state = state.read().await;
    let Some(mut event) = state.store.get_event(event_id, user.id).await? else {
        return Err(Error::NotFound("Event not found".to_string()));
    };

    if let Some(title) = non_empty(&req.title) {
        event.title = title.to_string();
    }
    if req.description.is_some() {
        event.description = req.description.clone();
    }
    if let Some(start) = non_empty(&req.start_time) {
        event.start_time = parse_event_time(start)?;
    }
    if let Some(end) = non_empty(&req.end_time) {
        event.end_time = parse_event_time(end)?;
    }

    state.store.save_event(&event).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Event updated successfully", "event": event })),
    )
        .into_response())
}

pub async fn delete_event(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(event_id): Path<i64>,
) -> Result<Response, Error> {
    let state = state.read().await;
    if !state.store.delete_event(event_id, user.id).await? {
        return Err(Error::NotFound("Event not found".to_string()));
    }

    Ok(Json(json!({ "message": "Event deleted successfully" })).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_event_time("2026-03-01T09:30:00Z").unwrap();
        assert_eq!(parsed.timestamp(), 1772357400);
    }

    #[test]
    fn test_parse_without_offset() {
        let parsed = parse_event_time("2026-03-01T09:30:00").unwrap();
        assert_eq!(parsed, parse_event_time("2026-03-01T09:30:00Z").unwrap());
    }

    #[test]
    fn test_parse_without_seconds() {
        let parsed = parse_event_time("2026-03-01T09:30").unwrap();
        assert_eq!(parsed, parse_event_time("2026-03-01T09:30:00Z").unwrap());
    }

    #[test]
    fn test_parse_garbage_rejected() {
        let result = parse_event_time("next tuesday");
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
