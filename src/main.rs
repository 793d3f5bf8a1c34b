use anyhow::Context;
use issue_notifier::configuration::get_configuration;
use issue_notifier::inbound::job::{self, JobPayload};
use issue_notifier::outbound::db::postgres_db::PostgresDb;
use issue_notifier::outbound::notifier::email_client::EmailClient;
use issue_notifier::outbound::telemetry::init_logger;

/// Worker entry point: the queue runtime invokes the binary with the path
/// of one JSON job payload; the exit status reports the task outcome back
/// to it.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration");
    init_logger(
        "issue-notifier",
        &configuration.log_level(),
        std::io::stdout,
    );

    let payload_path = std::env::args()
        .nth(1)
        .context("Usage: issue-notifier <payload.json>")?;
    let payload = std::fs::read(&payload_path)
        .with_context(|| format!("Failed to read the job payload at {}", payload_path))?;
    let payload: JobPayload =
        serde_json::from_slice(&payload).context("Failed to parse the job payload")?;

    let db = PostgresDb::new(&configuration.database);
    let mailer = EmailClient::new(configuration.email_client, configuration.application);

    job::run(payload, &db, &db, &db, &db, &mailer).await?;
    Ok(())
}
