//! Credential bundle stored by RDS in Secrets Manager

use serde::Deserialize;

use crate::error::MigrateError;

/// The JSON payload RDS writes for a managed database secret.
///
/// Read fresh on every invocation and dropped once the connection is open;
/// never persisted, never logged with credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretBundle {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub username: String,
    pub password: String,

    /// Engine tag written by RDS; informational only, never used to pick a
    /// driver
    #[serde(default)]
    pub engine: Option<String>,

    #[serde(default, rename = "dbClusterIdentifier")]
    pub db_cluster_identifier: Option<String>,
}

impl SecretBundle {
    /// Parse the raw Secrets Manager payload.
    pub fn parse(payload: &str) -> Result<Self, MigrateError> {
        serde_json::from_str(payload).map_err(|e| MigrateError::MalformedSecret(e.to_string()))
    }

    /// Connection URL without credentials, safe to log.
    pub fn database_url(&self) -> String {
        format!("postgres://{}:{}/{}", self.host, self.port, self.dbname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAYLOAD: &str = r#"{
        "dbClusterIdentifier": "demo-cluster",
        "password": "x",
        "dbname": "demo",
        "engine": "postgres",
        "port": 5432,
        "host": "db.internal",
        "username": "clusteradmin"
    }"#;

    #[test]
    fn test_parse_full_payload() {
        let bundle = SecretBundle::parse(FULL_PAYLOAD).unwrap();

        assert_eq!(bundle.host, "db.internal");
        assert_eq!(bundle.port, 5432);
        assert_eq!(bundle.dbname, "demo");
        assert_eq!(bundle.username, "clusteradmin");
        assert_eq!(bundle.password, "x");
        assert_eq!(bundle.engine.as_deref(), Some("postgres"));
        assert_eq!(bundle.db_cluster_identifier.as_deref(), Some("demo-cluster"));
    }

    #[test]
    fn test_parse_without_optional_fields() {
        let bundle = SecretBundle::parse(
            r#"{"host":"db.internal","port":5432,"dbname":"app","username":"svc","password":"x"}"#,
        )
        .unwrap();

        assert!(bundle.engine.is_none());
        assert!(bundle.db_cluster_identifier.is_none());
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let result = SecretBundle::parse(r#"{"host":"db.internal"}"#);

        match result {
            Err(MigrateError::MalformedSecret(message)) => {
                assert!(message.contains("port"));
            }
            other => panic!("expected malformed secret error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result = SecretBundle::parse("not json at all");
        assert!(matches!(result, Err(MigrateError::MalformedSecret(_))));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let bundle = SecretBundle::parse(
            r#"{"host":"h","port":1,"dbname":"d","username":"u","password":"p","masterarn":"arn:aws:..."}"#,
        )
        .unwrap();

        assert_eq!(bundle.host, "h");
    }

    #[test]
    fn test_database_url_has_no_credentials() {
        let bundle = SecretBundle::parse(FULL_PAYLOAD).unwrap();

        let url = bundle.database_url();
        assert_eq!(url, "postgres://db.internal:5432/demo");
        assert!(!url.contains("clusteradmin"));
    }
}
