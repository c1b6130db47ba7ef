//! Secrets Manager access

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use tracing::info;

use dbmigrate_core::MigrateError;

/// Narrow seam over the secret store, substitutable with a fake in tests
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Fetch the current value of the named secret as a raw string.
    async fn fetch(&self, secret_id: &str) -> Result<String, MigrateError>;
}

/// Production source backed by AWS Secrets Manager.
///
/// No caching: the secret is fetched fresh on every invocation so a rotated
/// password is picked up immediately.
pub struct SecretsManagerSource {
    client: aws_sdk_secretsmanager::Client,
}

impl SecretsManagerSource {
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: aws_sdk_secretsmanager::Client::new(&config),
        }
    }
}

#[async_trait]
impl SecretSource for SecretsManagerSource {
    async fn fetch(&self, secret_id: &str) -> Result<String, MigrateError> {
        info!(secret_id = %secret_id, "fetching database secret");

        let value = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| MigrateError::SecretRetrieval(DisplayErrorContext(&e).to_string()))?;

        value.secret_string().map(ToOwned::to_owned).ok_or_else(|| {
            MigrateError::SecretRetrieval(format!("secret {secret_id} has no string value"))
        })
    }
}
