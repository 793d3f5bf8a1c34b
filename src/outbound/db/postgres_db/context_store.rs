use anyhow::Context as _;
use async_trait::async_trait;
use sqlx::Row;

use super::PostgresDb;
use crate::domain::issue_published::{
    errors::IssuePublishedError,
    models::{
        context::{Context, ContextId},
        locale::Locale,
    },
    ports::ContextStore,
};

#[async_trait]
impl ContextStore for PostgresDb {
    #[tracing::instrument(name = "Fetch context from db", skip(self))]
    async fn get_by_id(&self, id: ContextId) -> Result<Option<Context>, IssuePublishedError> {
        let row = sqlx::query(
            "SELECT context_id, path, primary_locale FROM contexts WHERE context_id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch the context row")?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let primary_locale: String = row
            .try_get("primary_locale")
            .context("Context row misses its primary locale")?;
        let primary_locale = Locale::parse(primary_locale)
            .map_err(|e| IssuePublishedError::Unexpected(anyhow::Error::from(e)))?;

        Ok(Some(Context {
            id: ContextId::new(row.try_get("context_id").context("Context row misses its id")?),
            path: row.try_get("path").context("Context row misses its path")?,
            primary_locale,
        }))
    }
}
