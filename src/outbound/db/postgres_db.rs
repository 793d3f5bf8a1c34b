use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::configuration::DatabaseSettings;

mod context_store;
mod email_template_store;
mod notification_store;
mod user_store;

/// One shared Postgres pool implementing every store port the task needs.
/// Queries use the runtime API rather than the compile-time checked macros,
/// so the crate builds without a live database at hand.
#[derive(Clone, Debug)]
pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(configuration: &DatabaseSettings) -> PostgresDb {
        PostgresDb {
            pool: PgPoolOptions::new()
                .acquire_timeout(std::time::Duration::from_secs(2))
                .connect_lazy_with(configuration.with_db()),
        }
    }
}
