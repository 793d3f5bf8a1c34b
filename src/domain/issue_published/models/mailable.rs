use crate::domain::issue_published::models::locale::Locale;
use crate::domain::issue_published::models::notification::Notification;
use crate::domain::issue_published::models::user::User;

/// Whether the task sends emails alongside the in-app notifications.
/// Collapsing the (send_email, sender) pair into this enum at construction
/// time means a mail can never be built without a sender to put on it.
#[derive(Debug, Clone)]
pub enum EmailDelivery {
    Disabled,
    Enabled { sender: User },
}

/// A ready-to-send "issue published" email. Subject and body hold the
/// template text for one locale, untouched; the unsubscribe affordance is
/// the in-app notification this mail announces, which the mail adapter
/// turns into an opt-out link.
#[derive(Debug, Clone)]
pub struct IssuePublishedEmail {
    recipients: Vec<User>,
    sender: User,
    subject: String,
    body: String,
    unsubscribe: Notification,
    locale: Locale,
}

impl IssuePublishedEmail {
    /// Key of the email template this mailable is rendered from.
    pub const TEMPLATE_KEY: &'static str = "ISSUE_PUBLISH_NOTIFY";

    pub fn new(
        recipients: Vec<User>,
        sender: User,
        subject: String,
        body: String,
        unsubscribe: Notification,
        locale: Locale,
    ) -> Self {
        Self {
            recipients,
            sender,
            subject,
            body,
            unsubscribe,
            locale,
        }
    }

    pub fn recipients(&self) -> &[User] {
        &self.recipients
    }

    pub fn sender(&self) -> &User {
        &self.sender
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn unsubscribe(&self) -> &Notification {
        &self.unsubscribe
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}
