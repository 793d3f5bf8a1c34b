use anyhow::Context as _;
use async_trait::async_trait;
use sqlx::Row;

use super::PostgresDb;
use crate::domain::issue_published::{
    errors::IssuePublishedError,
    models::{context::ContextId, locale::Locale, template::EmailTemplate},
    ports::TemplateStore,
};

#[async_trait]
impl TemplateStore for PostgresDb {
    /// Templates are stored one row per (context, key, locale); all rows for
    /// the key are folded into one `EmailTemplate`. No rows means the key is
    /// unknown for that context.
    #[tracing::instrument(name = "Fetch email template from db", skip(self))]
    async fn get_by_key(
        &self,
        context_id: ContextId,
        key: &str,
    ) -> Result<Option<EmailTemplate>, IssuePublishedError> {
        let rows = sqlx::query(
            "SELECT locale, subject, body FROM email_templates \
            WHERE context_id = $1 AND template_key = $2",
        )
        .bind(context_id.as_i64())
        .bind(key)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch the email template rows")?;

        if rows.is_empty() {
            return Ok(None);
        }

        let mut template = EmailTemplate::new(key.to_string());
        for row in rows {
            let locale: String = row
                .try_get("locale")
                .context("Template row misses its locale")?;
            let locale = Locale::parse(locale)
                .map_err(|e| IssuePublishedError::Unexpected(anyhow::Error::from(e)))?;
            template = template.with_localized(
                locale,
                row.try_get("subject")
                    .context("Template row misses its subject")?,
                row.try_get("body").context("Template row misses its body")?,
            );
        }
        Ok(Some(template))
    }
}
