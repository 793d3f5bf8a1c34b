use uuid::Uuid;

use crate::domain::issue_published::{
    errors::IssuePublishedError,
    models::{
        context::ContextId,
        issue::{Issue, IssueId},
        locale::Locale,
        user::UserId,
    },
    ports::{ContextStore, Mailer, NotificationStore, TemplateStore, UserStore},
    service::IssuePublishedNotifier,
};

/// One queued "issue published" job, as the queue runtime hands it over.
/// `batch_id` groups sibling jobs for the runtime's own supervision; this
/// worker only records it on the tracing span.
#[derive(serde::Deserialize, Debug)]
pub struct JobPayload {
    #[serde(default)]
    pub batch_id: Option<Uuid>,
    pub context_id: i64,
    pub issue: IssuePayload,
    pub recipient_ids: Vec<i64>,
    pub locale: String,
    #[serde(default)]
    pub sender_id: Option<i64>,
    #[serde(default)]
    pub send_email: bool,
}

#[derive(serde::Deserialize, Debug)]
pub struct IssuePayload {
    pub id: i64,
}

/// Turns a payload into one task execution. The queue runtime owns retries
/// and batch supervision; this function only reports success or failure.
///
/// A `sender_id` that does not resolve to a user is fatal: the job cannot
/// put a From identity on the wire that does not exist.
#[tracing::instrument(
    name = "Run an issue-published notification job",
    skip(payload, contexts, templates, users, notifications, mailer),
    fields(
        batch_id = ?payload.batch_id,
        context_id = payload.context_id,
        issue_id = payload.issue.id,
    )
)]
pub async fn run<C, T, U, N, M>(
    payload: JobPayload,
    contexts: &C,
    templates: &T,
    users: &U,
    notifications: &N,
    mailer: &M,
) -> Result<(), IssuePublishedError>
where
    C: ContextStore,
    T: TemplateStore,
    U: UserStore,
    N: NotificationStore,
    M: Mailer,
{
    let sender = match payload.sender_id {
        Some(sender_id) => {
            let sender_id = UserId::new(sender_id);
            let sender = users.get(sender_id).await?.ok_or_else(|| {
                IssuePublishedError::NotFound(format!("Sender user {} not found", sender_id))
            })?;
            Some(sender)
        }
        None => None,
    };

    let locale = Locale::parse(payload.locale)?;
    let recipient_ids = payload.recipient_ids.into_iter().map(UserId::new).collect();

    let notifier = IssuePublishedNotifier::new(
        recipient_ids,
        ContextId::new(payload.context_id),
        Issue::new(IssueId::new(payload.issue.id)),
        locale,
        sender,
        payload.send_email,
    )?;
    notifier
        .execute(contexts, templates, users, notifications, mailer)
        .await
}
