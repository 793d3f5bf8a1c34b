use hmac::{Hmac, Mac};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::configuration::{ApplicationSettings, EmailClientSettings};
use crate::domain::issue_published::models::{notification::NotificationId, user::UserId};

mod issue_mailer;

/// Postmark-style HTTP mail adapter. Besides delivering the message it owns
/// the unsubscribe affordance: an HMAC-derived opt-out link carried as a
/// `List-Unsubscribe` header, keeping the body byte-identical to the
/// template text.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
    app_base_url: String,
    hmac_secret: Secret<String>,
}

impl EmailClient {
    pub fn new(configuration: EmailClientSettings, application: ApplicationSettings) -> Self {
        let timeout = configuration.timeout();

        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url: configuration.base_url,
            authorization_token: configuration.authorization_token,
            app_base_url: application.base_url,
            hmac_secret: application.hmac_secret,
        }
    }

    async fn send_notification<'a>(
        &'a self,
        email_request_body: SendEmailRequest<'a>,
    ) -> Result<(), anyhow::Error> {
        let url = format!("{}/email", self.base_url);
        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&email_request_body)
            .send()
            .await
            .map_err(anyhow::Error::from)?
            .error_for_status()
            .map_err(anyhow::Error::from)?;

        Ok(())
    }

    fn build_unsubscribe_link(&self, notification_id: NotificationId, user_id: UserId) -> String {
        let tag = unsubscribe_tag(notification_id, user_id, &self.hmac_secret);
        format!(
            "{}/notification/unsubscribe?validate={}&id={}",
            self.app_base_url, tag, notification_id
        )
    }
}

/// Hex HMAC-SHA256 over the id/user pair; verified by the platform's
/// unsubscribe endpoint, so no token needs storing.
fn unsubscribe_tag(
    notification_id: NotificationId,
    user_id: UserId,
    secret: &Secret<String>,
) -> String {
    let message = format!("id={}&user={}", notification_id, user_id);
    let hmac_tag = {
        let mut mac =
            Hmac::<sha2::Sha256>::new_from_slice(secret.expose_secret().as_bytes()).unwrap();
        mac.update(message.as_bytes());
        mac.finalize().into_bytes()
    };
    hex::encode(hmac_tag)
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: String,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
    headers: Vec<EmailHeader<'a>>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct EmailHeader<'a> {
    name: &'a str,
    value: String,
}
