//! Notes and tags queries

use super::Store;
use crate::error::Result;
use serde::Serialize;
use tokio_postgres::Row;

/// A note with its tag names
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: i64,
    #[serde(skip_serializing)]
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub pinned: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub tags: Vec<String>,
}

fn note_from_row(row: &Row, tags: Vec<String>) -> Note {
    Note {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        content: row.get("content"),
        pinned: row.get("pinned"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        tags,
    }
}

impl Store {
    /// All notes belonging to a user, with their tags
    pub async fn list_notes(&self, user_id: i64) -> Result<Vec<Note>> {
        let rows = self
            .client
            .query(
                "SELECT n.id, n.user_id, n.title, n.content, n.pinned, \
                        n.created_at, n.updated_at, \
                        COALESCE(ARRAY_AGG(t.name ORDER BY t.name) \
                                 FILTER (WHERE t.name IS NOT NULL), \
                                 ARRAY[]::TEXT[]) AS tags \
                 FROM notes n \
                 LEFT JOIN note_tags nt ON nt.note_id = n.id \
                 LEFT JOIN tags t ON t.id = nt.tag_id \
                 WHERE n.user_id = $1 \
                 GROUP BY n.id \
                 ORDER BY n.id",
                &[&user_id],
            )
            .await?;
        Ok(rows
            .iter()
            .map(|row| note_from_row(row, row.get("tags")))
            .collect())
    }

    /// A user's pinned notes
    pub async fn list_pinned_notes(&self, user_id: i64) -> Result<Vec<Note>> {
        let rows = self
            .client
            .query(
                "SELECT n.id, n.user_id, n.title, n.content, n.pinned, \
                        n.created_at, n.updated_at, \
                        COALESCE(ARRAY_AGG(t.name ORDER BY t.name) \
                                 FILTER (WHERE t.name IS NOT NULL), \
                                 ARRAY[]::TEXT[]) AS tags \
                 FROM notes n \
                 LEFT JOIN note_tags nt ON nt.note_id = n.id \
                 LEFT JOIN tags t ON t.id = nt.tag_id \
                 WHERE n.user_id = $1 AND n.pinned \
                 GROUP BY n.id \
                 ORDER BY n.id",
                &[&user_id],
            )
            .await?;
        Ok(rows
            .iter()
            .map(|row| note_from_row(row, row.get("tags")))
            .collect())
    }

    /// Create a note and link its tags in one transaction.
    ///
    /// Tags are shared across users and get-or-created by name.
    pub async fn create_note(
        &mut self,
        user_id: i64,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<Note> {
        let tx = self.client.transaction().await?;

        let row = tx
            .query_one(
                "INSERT INTO notes (user_id, title, content) \
                 VALUES ($1, $2, $3) \
                 RETURNING id, user_id, title, content, pinned, created_at, updated_at",
                &[&user_id, &title, &content],
            )
            .await?;
        let note_id: i64 = row.get("id");

        for name in tags {
            let tag_row = tx
                .query_one(
                    "INSERT INTO tags (name) VALUES ($1) \
                     ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
                     RETURNING id",
                    &[&name],
                )
                .await?;
            let tag_id: i64 = tag_row.get("id");
            tx.execute(
                "INSERT INTO note_tags (note_id, tag_id) VALUES ($1, $2)",
                &[&note_id, &tag_id],
            )
            .await?;
        }

        tx.commit().await?;

        Ok(note_from_row(&row, tags.to_vec()))
    }

    /// Replace a note's content, bumping updated_at.
    ///
    /// Returns None if the note does not exist or belongs to another user.
    pub async fn update_note_content(
        &self,
        note_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Option<Note>> {
        let row = self
            .client
            .query_opt(
                "UPDATE notes SET content = $1, updated_at = NOW() \
                 WHERE id = $2 AND user_id = $3 \
                 RETURNING id, user_id, title, content, pinned, created_at, updated_at",
                &[&content, &note_id, &user_id],
            )
            .await?;

        match row {
            Some(row) => {
                let tags = self.note_tags(note_id).await?;
                Ok(Some(note_from_row(&row, tags)))
            }
            None => Ok(None),
        }
    }

    /// Delete a note; returns false if it was not the user's to delete
    pub async fn delete_note(&self, note_id: i64, user_id: i64) -> Result<bool> {
        let deleted = self
            .client
            .execute(
                "DELETE FROM notes WHERE id = $1 AND user_id = $2",
                &[&note_id, &user_id],
            )
            .await?;
        Ok(deleted > 0)
    }

    /// Flip a note's pinned flag, returning the new value
    pub async fn toggle_pin(&self, note_id: i64, user_id: i64) -> Result<Option<bool>> {
        let row = self
            .client
            .query_opt(
                "UPDATE notes SET pinned = NOT pinned \
                 WHERE id = $1 AND user_id = $2 RETURNING pinned",
                &[&note_id, &user_id],
            )
            .await?;
        Ok(row.map(|row| row.get("pinned")))
    }

    /// All tag names, across users
    pub async fn list_tags(&self) -> Result<Vec<String>> {
        let rows = self
            .client
            .query("SELECT name FROM tags ORDER BY name", &[])
            .await?;
        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    async fn note_tags(&self, note_id: i64) -> Result<Vec<String>> {
        let rows = self
            .client
            .query(
                "SELECT t.name FROM tags t \
                 JOIN note_tags nt ON nt.tag_id = t.id \
                 WHERE nt.note_id = $1 ORDER BY t.name",
                &[&note_id],
            )
            .await?;
        Ok(rows.iter().map(|row| row.get("name")).collect())
    }
}
