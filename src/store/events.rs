//! Calendar event queries

use super::Store;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_postgres::Row;

/// A calendar event
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

fn event_from_row(row: &Row) -> CalendarEvent {
    CalendarEvent {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        description: row.get("description"),
        start_time: row.get("start_time"),
        end_time: row.get("end_time"),
        created_at: row.get("created_at"),
    }
}

impl Store {
    /// All events belonging to a user
    pub async fn list_events(&self, user_id: i64) -> Result<Vec<CalendarEvent>> {
        let rows = self
            .client
            .query(
                "SELECT id, user_id, title, description, start_time, end_time, created_at \
                 FROM calendar_events WHERE user_id = $1 ORDER BY start_time",
                &[&user_id],
            )
            .await?;
        Ok(rows.iter().map(event_from_row).collect())
    }

    /// Persist a new event
    pub async fn create_event(
        &self,
        user_id: i64,
        title: &str,
        description: Option<&str>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<CalendarEvent> {
        let row = self
            .client
            .query_one(
                "INSERT INTO calendar_events \
                 (user_id, title, description, start_time, end_time) \
                 VALUES ($1, $2, $3, $4, $5) \
                 RETURNING id, user_id, title, description, start_time, end_time, created_at",
                &[&user_id, &title, &description, &start_time, &end_time],
            )
            .await?;
        Ok(event_from_row(&row))
    }

    /// Fetch one event, scoped to its owner
    pub async fn get_event(&self, event_id: i64, user_id: i64) -> Result<Option<CalendarEvent>> {
        let row = self
            .client
            .query_opt(
                "SELECT id, user_id, title, description, start_time, end_time, created_at \
                 FROM calendar_events WHERE id = $1 AND user_id = $2",
                &[&event_id, &user_id],
            )
            .await?;
        Ok(row.as_ref().map(event_from_row))
    }

    /// Write back a modified event
    pub async fn save_event(&self, event: &CalendarEvent) -> Result<()> {
        self.client
            .execute(
                "UPDATE calendar_events \
                 SET title = $1, description = $2, start_time = $3, end_time = $4 \
                 WHERE id = $5",
                &[
                    &event.title,
                    &event.description,
                    &event.start_time,
                    &event.end_time,
                    &event.id,
                ],
            )
            .await?;
        Ok(())
    }

    /// Delete an event; returns false if it was not the user's to delete
    pub async fn delete_event(&self, event_id: i64, user_id: i64) -> Result<bool> {
        let deleted = self
            .client
            .execute(
                "DELETE FROM calendar_events WHERE id = $1 AND user_id = $2",
                &[&event_id, &user_id],
            )
            .await?;
        Ok(deleted > 0)
    }
}
