//! Database layer: pool construction, schema migrations, models, and
//! repositories for the pet-care tracker.

pub mod migrations;
pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use migrations::run_migrations;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL (`sqlite://path/to.db`).
///
/// The database file is created if missing, and foreign-key enforcement is
/// enabled on every connection.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Cheap connectivity check used by startup and the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
