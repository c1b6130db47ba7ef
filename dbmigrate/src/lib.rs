//! CloudFormation custom resource that applies database schema migrations
//!
//! Invoked by the provider framework on stack lifecycle events. Create and
//! Update fetch the cluster credential secret from Secrets Manager, connect
//! to PostgreSQL and apply the changelog bundled under `migrations/`. Delete
//! reports success without touching the database (schema survives teardown).

pub mod changelog;
pub mod event;
pub mod handler;
pub mod response;
pub mod secrets;

pub use handler::MigrationHandler;
