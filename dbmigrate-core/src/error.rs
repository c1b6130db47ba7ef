//! Error taxonomy for the migration handler

use thiserror::Error;

/// Everything that can go wrong between the lifecycle event and the
/// custom-resource response.
///
/// Every variant surfaces the same way (logged, invocation reported as
/// FAILED); the taxonomy exists so the log carries a stable code instead of
/// forcing the operator to pattern-match free-form messages.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Missing or invalid environment configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Secret store unreachable, access denied, or secret not found
    #[error("failed to retrieve database secret: {0}")]
    SecretRetrieval(String),

    /// Secret payload did not parse into the expected bundle shape
    #[error("malformed database secret: {0}")]
    MalformedSecret(String),

    /// Database unreachable or credentials rejected
    #[error("database connection failed: {0}")]
    Connection(String),

    /// Changelog engine raised while applying changesets
    #[error("migration execution failed: {0}")]
    MigrationExecution(String),
}

impl MigrateError {
    /// Stable error-code string for structured logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "ConfigurationError",
            Self::SecretRetrieval(_) => "SecretRetrievalError",
            Self::MalformedSecret(_) => "MalformedSecretError",
            Self::Connection(_) => "ConnectionError",
            Self::MigrationExecution(_) => "MigrationExecutionError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            MigrateError::Configuration(String::new()).code(),
            "ConfigurationError"
        );
        assert_eq!(
            MigrateError::SecretRetrieval(String::new()).code(),
            "SecretRetrievalError"
        );
        assert_eq!(
            MigrateError::MalformedSecret(String::new()).code(),
            "MalformedSecretError"
        );
        assert_eq!(MigrateError::Connection(String::new()).code(), "ConnectionError");
        assert_eq!(
            MigrateError::MigrationExecution(String::new()).code(),
            "MigrationExecutionError"
        );
    }

    #[test]
    fn test_display_carries_the_cause() {
        let err = MigrateError::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "database connection failed: connection refused");
    }
}
