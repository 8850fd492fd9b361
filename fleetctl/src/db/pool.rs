//! Database connection pool management.

use std::str::FromStr;

use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::DatabaseConfig;

/// Create the SQLite connection pool and bring the schema up to date.
///
/// Foreign keys are enforced on every connection; the join table relies on
/// them to reject links to missing rows.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("parse database url {}", config.url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;

    crate::migrator().run(&pool).await.context("run migrations")?;

    Ok(pool)
}
