//! Changelog application against the target database

use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::{info, warn};

use dbmigrate_core::{MigrateError, SecretBundle};

/// Changesets bundled into the binary at compile time; the history table is
/// owned by sqlx.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Narrow seam over the migration engine, substitutable with a fake in tests
#[async_trait]
pub trait ChangelogRunner: Send + Sync {
    /// Connect to the database described by the bundle and apply every
    /// pending changeset, with no context filtering.
    async fn apply(&self, bundle: &SecretBundle) -> Result<(), MigrateError>;
}

/// Production runner: the embedded sqlx migrator over a plain Postgres
/// connection
pub struct PostgresChangelogRunner;

impl PostgresChangelogRunner {
    fn connect_options(bundle: &SecretBundle) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&bundle.host)
            .port(bundle.port)
            .database(&bundle.dbname)
            .username(&bundle.username)
            .password(&bundle.password)
    }
}

#[async_trait]
impl ChangelogRunner for PostgresChangelogRunner {
    async fn apply(&self, bundle: &SecretBundle) -> Result<(), MigrateError> {
        info!(url = %bundle.database_url(), "establishing database connection");
        let mut conn = PgConnection::connect_with(&Self::connect_options(bundle))
            .await
            .map_err(|e| MigrateError::Connection(e.to_string()))?;
        info!("connection established");

        // Each changeset commits in its own transaction inside the migrator,
        // so there is nothing to roll back afterwards.
        // `run_direct` is `run` minus the `Acquire` indirection; sqlx exposes
        // it for exactly the "implementation of `Acquire` is not general
        // enough" error that `run(&mut conn)` hits under `#[async_trait]`.
        let outcome = MIGRATOR
            .run_direct(&mut conn)
            .await
            .map_err(|e| MigrateError::MigrationExecution(e.to_string()));

        // Close on every exit path; a close failure must not mask the
        // migration outcome.
        if let Err(e) = conn.close().await {
            warn!(error = %e, "failed to close database connection");
        }

        if outcome.is_ok() {
            info!(changesets = MIGRATOR.iter().count(), "changelog applied");
        }
        outcome
    }
}
