use chrono::{DateTime, Utc};

use crate::domain::issue_published::models::context::ContextId;
use crate::domain::issue_published::models::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(i64);

impl NotificationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum NotificationTypeError {
    #[error("Unknown notification type: {0}")]
    UnknownType(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationType {
    PublishedIssue,
}

impl NotificationType {
    const PUBLISHED_ISSUE: &'static str = "published-issue";

    pub fn parse(value: &str) -> Result<NotificationType, NotificationTypeError> {
        match value {
            Self::PUBLISHED_ISSUE => Ok(NotificationType::PublishedIssue),
            _ => Err(NotificationTypeError::UnknownType(value.into())),
        }
    }
}

impl From<NotificationType> for String {
    fn from(value: NotificationType) -> Self {
        match value {
            NotificationType::PublishedIssue => NotificationType::PUBLISHED_ISSUE.into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AssocTypeError {
    #[error("Unknown associated entity type: {0}")]
    UnknownType(String),
}

/// Entity kind a notification points back at.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AssocType {
    Issue,
}

impl AssocType {
    const ISSUE: &'static str = "issue";

    pub fn parse(value: &str) -> Result<AssocType, AssocTypeError> {
        match value {
            Self::ISSUE => Ok(AssocType::Issue),
            _ => Err(AssocTypeError::UnknownType(value.into())),
        }
    }
}

impl From<AssocType> for String {
    fn from(value: AssocType) -> Self {
        match value {
            AssocType::Issue => AssocType::ISSUE.into(),
        }
    }
}

/// A persisted in-app notification entry. The task only ever reads it back
/// to bind an unsubscribe affordance to the email it is about to send;
/// read/unread handling belongs to the notification subsystem.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub notification_type: NotificationType,
    pub context_id: ContextId,
    pub assoc_type: AssocType,
    pub assoc_id: i64,
    pub created_at: DateTime<Utc>,
}
