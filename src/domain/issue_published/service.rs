use crate::domain::issue_published::{
    errors::IssuePublishedError,
    models::{
        context::{Context, ContextId},
        issue::Issue,
        locale::Locale,
        mailable::{EmailDelivery, IssuePublishedEmail},
        notification::{AssocType, Notification, NotificationType},
        template::EmailTemplate,
        user::{User, UserId},
    },
    ports::{ContextStore, Mailer, NotificationStore, TemplateStore, UserStore},
};

/// One "issue published" fan-out task: record an in-app notification for
/// every recipient and, when enabled, send each of them the templated
/// announcement email. An instance is one unit of work for the external
/// queue runtime; retries and batch supervision live there, not here.
#[derive(Debug, Clone)]
pub struct IssuePublishedNotifier {
    recipient_ids: Vec<UserId>,
    context_id: ContextId,
    issue: Issue,
    locale: Locale,
    email: EmailDelivery,
}

impl IssuePublishedNotifier {
    /// Sending an email requires a sender identity; everything else is
    /// checked lazily while the task runs.
    pub fn new(
        recipient_ids: Vec<UserId>,
        context_id: ContextId,
        issue: Issue,
        locale: Locale,
        sender: Option<User>,
        send_email: bool,
    ) -> Result<Self, IssuePublishedError> {
        let email = match (send_email, sender) {
            (true, Some(sender)) => EmailDelivery::Enabled { sender },
            (true, None) => {
                return Err(IssuePublishedError::InvalidConfiguration(
                    "Sender should be set to send an email".to_string(),
                ))
            }
            (false, _) => EmailDelivery::Disabled,
        };

        Ok(Self {
            recipient_ids,
            context_id,
            issue,
            locale,
            email,
        })
    }

    /// Runs the fan-out to completion. Recipients that no longer resolve to
    /// a user are skipped; any other collaborator failure aborts the task,
    /// leaving the side effects of earlier recipients in place.
    #[tracing::instrument(
        name = "Notify users of a published issue",
        skip(self, contexts, templates, users, notifications, mailer),
        fields(
            context_id = %self.context_id,
            issue_id = %self.issue.id(),
            recipient_count = self.recipient_ids.len(),
        )
    )]
    pub async fn execute<C, T, U, N, M>(
        &self,
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
        let context = contexts
            .get_by_id(self.context_id)
            .await?
            .ok_or_else(|| {
                IssuePublishedError::NotFound(format!("Context {} not found", self.context_id))
            })?;

        let template = templates
            .get_by_key(self.context_id, IssuePublishedEmail::TEMPLATE_KEY)
            .await?
            .ok_or_else(|| {
                IssuePublishedError::NotFound(format!(
                    "No {} template for context {}",
                    IssuePublishedEmail::TEMPLATE_KEY,
                    self.context_id
                ))
            })?;

        for recipient_id in &self.recipient_ids {
            let recipient = match users.get(*recipient_id).await? {
                Some(user) => user,
                None => {
                    tracing::warn!(
                        recipient_id = %recipient_id,
                        "Skipping a recipient that no longer resolves to a user",
                    );
                    continue;
                }
            };

            let notification = notifications
                .create(
                    *recipient_id,
                    NotificationType::PublishedIssue,
                    self.context_id,
                    AssocType::Issue,
                    self.issue.id().as_i64(),
                )
                .await?;

            let sender = match &self.email {
                EmailDelivery::Disabled => continue,
                EmailDelivery::Enabled { sender } => sender,
            };

            let mailable =
                self.build_mailable(&context, &template, sender, recipient, notification)?;
            mailer.send(&mailable).await?;
        }

        Ok(())
    }

    fn build_mailable(
        &self,
        context: &Context,
        template: &EmailTemplate,
        sender: &User,
        recipient: User,
        notification: Notification,
    ) -> Result<IssuePublishedEmail, IssuePublishedError> {
        let subject = template
            .subject(&self.locale)
            .or_else(|| template.subject(&context.primary_locale))
            .ok_or_else(|| {
                IssuePublishedError::NotFound(format!(
                    "Template {} has no subject in {} or {}",
                    template.key(),
                    self.locale,
                    context.primary_locale
                ))
            })?;

        let body = template
            .body(&self.locale)
            .or_else(|| template.body(&context.primary_locale))
            .ok_or_else(|| {
                IssuePublishedError::NotFound(format!(
                    "Template {} has no body in {} or {}",
                    template.key(),
                    self.locale,
                    context.primary_locale
                ))
            })?;

        Ok(IssuePublishedEmail::new(
            vec![recipient],
            sender.clone(),
            subject.to_string(),
            body.to_string(),
            notification,
            self.locale.clone(),
        ))
    }
}
