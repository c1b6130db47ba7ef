//! Lambda entry point for the database-migration custom resource

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dbmigrate::changelog::PostgresChangelogRunner;
use dbmigrate::event::CustomResourceEvent;
use dbmigrate::handler::MigrationHandler;
use dbmigrate::response;
use dbmigrate::secrets::SecretsManagerSource;
use dbmigrate_core::HandlerConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch adds its own timestamps and does not render ANSI colors.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dbmigrate=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time(),
        )
        .init();

    let config = HandlerConfig::load()?;
    info!(
        secret = %config.database_secret_name,
        region = %config.region,
        "starting database-migration handler"
    );

    let secrets = SecretsManagerSource::new(&config.region).await;
    let handler = Arc::new(MigrationHandler::new(
        config,
        secrets,
        PostgresChangelogRunner,
    ));
    let http = reqwest::Client::new();

    lambda_runtime::run(service_fn(
        move |request: LambdaEvent<CustomResourceEvent>| {
            let handler = Arc::clone(&handler);
            let http = http.clone();
            async move {
                let (event, _context) = request.into_parts();
                let outcome = handler.handle(&event).await;
                response::send(&http, &event.response_url, &outcome).await?;
                Ok::<serde_json::Value, Error>(serde_json::to_value(&outcome)?)
            }
        },
    ))
    .await
}
