use async_trait::async_trait;

use super::*;
use crate::domain::issue_published::{
    errors::IssuePublishedError, models::mailable::IssuePublishedEmail, ports::Mailer,
};

#[async_trait]
impl Mailer for EmailClient {
    #[tracing::instrument(name = "Send issue-published email", skip(self, email))]
    async fn send(&self, email: &IssuePublishedEmail) -> Result<(), IssuePublishedError> {
        let notification = email.unsubscribe();
        let unsubscribe_link = self.build_unsubscribe_link(notification.id, notification.user_id);
        let to = email
            .recipients()
            .iter()
            .map(|recipient| recipient.email.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        let request_body = SendEmailRequest {
            from: email.sender().email.as_ref(),
            to,
            subject: email.subject(),
            html_body: email.body(),
            text_body: email.body(),
            headers: vec![
                EmailHeader {
                    name: "List-Unsubscribe",
                    value: format!("<{}>", unsubscribe_link),
                },
                EmailHeader {
                    name: "Content-Language",
                    value: email.locale().to_string(),
                },
            ],
        };
        self.send_notification(request_body)
            .await
            .map_err(IssuePublishedError::Unexpected)
    }
}
