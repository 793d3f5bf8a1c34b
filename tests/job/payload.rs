use claim::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use issue_notifier::domain::issue_published::errors::IssuePublishedError;
use issue_notifier::inbound::job::{self, JobPayload};

use crate::helpers::{context, english_template, spawn_harness, user};

fn payload(value: serde_json::Value) -> JobPayload {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn a_full_payload_runs_the_task_end_to_end() {
    let mut harness = spawn_harness().await;
    harness.store = harness
        .store
        .with_context(context(1, "en"))
        .with_template(1, english_template())
        .with_user(user(7, "reader@example.org"))
        .with_user(user(99, "editor@example.org"));

    Mock::given(method("POST"))
        .and(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&harness.email_server)
        .await;

    let outcome = job::run(
        payload(serde_json::json!({
            "batch_id": "6ecd8c99-4036-403d-bf84-cf8400f67836",
            "context_id": 1,
            "issue": { "id": 3 },
            "recipient_ids": [7],
            "locale": "en",
            "sender_id": 99,
            "send_email": true,
        })),
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.email_client,
    )
    .await;

    assert_ok!(outcome);
    assert_eq!(harness.store.created().len(), 1);
}

#[tokio::test]
async fn an_omitted_send_email_flag_means_notification_only() {
    let mut harness = spawn_harness().await;
    harness.store = harness
        .store
        .with_context(context(1, "en"))
        .with_template(1, english_template())
        .with_user(user(7, "reader@example.org"));

    let outcome = job::run(
        payload(serde_json::json!({
            "context_id": 1,
            "issue": { "id": 3 },
            "recipient_ids": [7],
            "locale": "en",
        })),
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.email_client,
    )
    .await;

    assert_ok!(outcome);
    assert_eq!(harness.store.created().len(), 1);
    assert!(harness.email_requests().await.is_empty());
}

#[tokio::test]
async fn an_unknown_sender_is_fatal_before_any_write() {
    let mut harness = spawn_harness().await;
    harness.store = harness
        .store
        .with_context(context(1, "en"))
        .with_template(1, english_template())
        .with_user(user(7, "reader@example.org"));

    let outcome = job::run(
        payload(serde_json::json!({
            "context_id": 1,
            "issue": { "id": 3 },
            "recipient_ids": [7],
            "locale": "en",
            "sender_id": 4242,
            "send_email": true,
        })),
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.email_client,
    )
    .await;

    assert!(matches!(outcome, Err(IssuePublishedError::NotFound(_))));
    assert!(harness.store.created().is_empty());
}

#[tokio::test]
async fn emailing_without_a_sender_id_is_an_invalid_configuration() {
    let harness = spawn_harness().await;

    let outcome = job::run(
        payload(serde_json::json!({
            "context_id": 1,
            "issue": { "id": 3 },
            "recipient_ids": [7],
            "locale": "en",
            "send_email": true,
        })),
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.email_client,
    )
    .await;

    assert!(matches!(
        outcome,
        Err(IssuePublishedError::InvalidConfiguration(_))
    ));
}

#[tokio::test]
async fn a_blank_locale_is_an_invalid_configuration() {
    let harness = spawn_harness().await;

    let outcome = job::run(
        payload(serde_json::json!({
            "context_id": 1,
            "issue": { "id": 3 },
            "recipient_ids": [7],
            "locale": "  ",
        })),
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.store,
        &harness.email_client,
    )
    .await;

    assert!(matches!(
        outcome,
        Err(IssuePublishedError::InvalidConfiguration(_))
    ));
}
