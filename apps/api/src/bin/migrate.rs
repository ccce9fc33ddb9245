//! Operator tool: applies `migrations/` to the configured database.
//! The API server never migrates on its own.

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let password = std::env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?;

    let options = PgConnectOptions::from_str(&database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?
        .password(&password);

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    info!("Applying migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations applied");

    Ok(())
}
