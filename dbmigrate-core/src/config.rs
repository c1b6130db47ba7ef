//! Handler configuration

use serde::Deserialize;

use crate::error::MigrateError;

/// Settings the deployment stack passes through the Lambda environment.
///
/// Built once at startup and handed to the handler, so a missing variable
/// fails fast with a configuration error instead of surfacing later as an
/// unrelated SDK failure.
#[derive(Debug, Clone, Deserialize)]
pub struct HandlerConfig {
    /// Name of the Secrets Manager secret holding the cluster credentials
    pub database_secret_name: String,

    /// Region the secret lives in
    pub region: String,
}

impl HandlerConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `DATABASE_SECRET_NAME` and `REGION`; both must be present and
    /// non-empty.
    pub fn load() -> Result<Self, MigrateError> {
        Self::from_builder(config::Config::builder().add_source(config::Environment::default()))
    }

    /// Build from a prepared source. Tests use this with overrides instead
    /// of mutating the process environment.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, MigrateError> {
        let settings = builder
            .build()
            .map_err(|e| MigrateError::Configuration(e.to_string()))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| MigrateError::Configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), MigrateError> {
        if self.database_secret_name.trim().is_empty() {
            return Err(MigrateError::Configuration(
                "DATABASE_SECRET_NAME must not be empty".to_string(),
            ));
        }
        if self.region.trim().is_empty() {
            return Err(MigrateError::Configuration(
                "REGION must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
