use anyhow::Context as _;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use super::PostgresDb;
use crate::domain::issue_published::{
    errors::IssuePublishedError,
    models::{
        context::ContextId,
        notification::{AssocType, Notification, NotificationId, NotificationType},
        user::UserId,
    },
    ports::NotificationStore,
};

#[async_trait]
impl NotificationStore for PostgresDb {
    #[tracing::instrument(name = "Record notification in db", skip(self))]
    async fn create(
        &self,
        user_id: UserId,
        notification_type: NotificationType,
        context_id: ContextId,
        assoc_type: AssocType,
        assoc_id: i64,
    ) -> Result<Notification, IssuePublishedError> {
        let created_at = Utc::now();
        let row = sqlx::query(
            "INSERT INTO notifications \
                (user_id, notification_type, context_id, assoc_type, assoc_id, created_at) \
            VALUES ($1, $2, $3, $4, $5, $6) \
            RETURNING notification_id",
        )
        .bind(user_id.as_i64())
        .bind(String::from(notification_type))
        .bind(context_id.as_i64())
        .bind(String::from(assoc_type))
        .bind(assoc_id)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert the notification row")?;

        let id: i64 = row
            .try_get("notification_id")
            .context("Notification insert returned no id")?;

        Ok(Notification {
            id: NotificationId::new(id),
            user_id,
            notification_type,
            context_id,
            assoc_type,
            assoc_id,
            created_at,
        })
    }
}
