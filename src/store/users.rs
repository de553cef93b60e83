//! Credential store queries

use super::Store;
use crate::auth::models::User;
use crate::error::Result;
use tokio_postgres::Row;

fn user_from_row(row: &Row) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

impl Store {
    /// Persist a new user record
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User> {
        let row = self
            .client
            .query_one(
                "INSERT INTO users (username, email, password_hash) \
                 VALUES ($1, $2, $3) \
                 RETURNING id, username, email, password_hash, created_at",
                &[&username, &email, &password_hash],
            )
            .await?;
        Ok(user_from_row(&row))
    }

    /// Look up a user by email (login path)
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = self
            .client
            .query_opt(
                "SELECT id, username, email, password_hash, created_at \
                 FROM users WHERE email = $1",
                &[&email],
            )
            .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    /// Look up a user by id (token resolution path)
    pub async fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = self
            .client
            .query_opt(
                "SELECT id, username, email, password_hash, created_at \
                 FROM users WHERE id = $1",
                &[&id],
            )
            .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    /// Whether an email is already owned by a user other than `user_id`
    pub async fn email_taken_by_other(&self, email: &str, user_id: i64) -> Result<bool> {
        let row = self
            .client
            .query_one(
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND id <> $2)",
                &[&email, &user_id],
            )
            .await?;
        Ok(row.get(0))
    }

    /// Apply a credential rotation atomically.
    ///
    /// Either every requested field update persists or none do.
    pub async fn update_login_settings(
        &mut self,
        user_id: i64,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<()> {
        let tx = self.client.transaction().await?;

        if let Some(email) = email {
            tx.execute(
                "UPDATE users SET email = $1 WHERE id = $2",
                &[&email, &user_id],
            )
            .await?;
        }

        if let Some(hash) = password_hash {
            tx.execute(
                "UPDATE users SET password_hash = $1 WHERE id = $2",
                &[&hash, &user_id],
            )
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
