use anyhow::Context as _;
use async_trait::async_trait;
use sqlx::Row;

use super::PostgresDb;
use crate::domain::issue_published::{
    errors::IssuePublishedError,
    models::user::{User, UserEmail, UserId},
    ports::UserStore,
};

#[async_trait]
impl UserStore for PostgresDb {
    #[tracing::instrument(name = "Fetch user from db", skip(self))]
    async fn get(&self, id: UserId) -> Result<Option<User>, IssuePublishedError> {
        let row = sqlx::query("SELECT user_id, email, full_name FROM users WHERE user_id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch the user row")?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let email: String = row.try_get("email").context("User row misses its email")?;
        let email = UserEmail::parse(email)
            .map_err(|e| IssuePublishedError::Unexpected(anyhow::Error::from(e)))?;

        Ok(Some(User::new(
            UserId::new(row.try_get("user_id").context("User row misses its id")?),
            email,
            row.try_get("full_name").context("User row misses its name")?,
        )))
    }
}
