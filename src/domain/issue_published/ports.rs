use async_trait::async_trait;

use crate::domain::issue_published::{
    errors::IssuePublishedError,
    models::{
        context::{Context, ContextId},
        mailable::IssuePublishedEmail,
        notification::{AssocType, Notification, NotificationType},
        template::EmailTemplate,
        user::{User, UserId},
    },
};

#[async_trait]
pub trait ContextStore: Send + Sync {
    async fn get_by_id(&self, id: ContextId) -> Result<Option<Context>, IssuePublishedError>;
}

#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn get_by_key(
        &self,
        context_id: ContextId,
        key: &str,
    ) -> Result<Option<EmailTemplate>, IssuePublishedError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// `None` means the id does not resolve to a user any more; callers
    /// decide whether that is fatal.
    async fn get(&self, id: UserId) -> Result<Option<User>, IssuePublishedError>;
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn create(
        &self,
        user_id: UserId,
        notification_type: NotificationType,
        context_id: ContextId,
        assoc_type: AssocType,
        assoc_id: i64,
    ) -> Result<Notification, IssuePublishedError>;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &IssuePublishedEmail) -> Result<(), IssuePublishedError>;
}
