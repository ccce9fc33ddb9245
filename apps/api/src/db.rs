use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
/// The password is supplied separately so the URL can be logged and shared without it.
pub async fn create_pool(database_url: &str, password: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let options = PgConnectOptions::from_str(database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?
        .password(password);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
