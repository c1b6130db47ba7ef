//! Core types for the database-migration custom resource
//!
//! This crate holds the pieces shared between the handler and its tests:
//! the error taxonomy, the environment-derived configuration, and the
//! credential bundle read from Secrets Manager.

pub mod config;
pub mod error;
pub mod secret;

pub use config::HandlerConfig;
pub use error::MigrateError;
pub use secret::SecretBundle;
