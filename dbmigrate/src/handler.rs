//! Lifecycle dispatch for the migration custom resource

use tracing::{error, info};

use dbmigrate_core::{HandlerConfig, MigrateError, SecretBundle};

use crate::changelog::ChangelogRunner;
use crate::event::{CustomResourceEvent, RequestType};
use crate::response::CustomResourceResponse;
use crate::secrets::SecretSource;

/// Applies the bundled changelog on stack create and update.
///
/// The secret store and the migration engine sit behind traits so tests can
/// drive the dispatch with fakes.
pub struct MigrationHandler<S, R> {
    config: HandlerConfig,
    secrets: S,
    runner: R,
}

impl<S: SecretSource, R: ChangelogRunner> MigrationHandler<S, R> {
    pub fn new(config: HandlerConfig, secrets: S, runner: R) -> Self {
        Self {
            config,
            secrets,
            runner,
        }
    }

    /// Dispatch one lifecycle event to a terminal response.
    pub async fn handle(&self, event: &CustomResourceEvent) -> CustomResourceResponse {
        match event.request_type {
            // Schema is kept on teardown; nothing to undo, no calls to make.
            RequestType::Delete => {
                info!("delete event, nothing to migrate");
                CustomResourceResponse::success(event)
            }
            RequestType::Create | RequestType::Update => match self.migrate_database().await {
                Ok(()) => CustomResourceResponse::success(event),
                Err(e) => {
                    error!(code = e.code(), error = %e, "database migration failed");
                    CustomResourceResponse::failed(event, e.to_string())
                }
            },
        }
    }

    async fn migrate_database(&self) -> Result<(), MigrateError> {
        let payload = self.secrets.fetch(&self.config.database_secret_name).await?;
        let bundle = SecretBundle::parse(&payload)?;
        info!(url = %bundle.database_url(), "built database connection string");

        self.runner.apply(&bundle).await
    }
}
