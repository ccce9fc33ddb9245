mod config;
mod db;
mod errors;
mod generation;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod store;
mod theme;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgProjectStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lupern API v{}", env!("CARGO_PKG_VERSION"));
    info!("{config:?}");

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, &config.database_password).await?;
    let store = PgProjectStore::new(db);

    // Initialize model client
    let model = LlmClient::new(
        config.huggingface_api_key.clone(),
        config.model_api_url.clone(),
        config.model_timeout,
    )?;
    info!(
        "Model client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        config.model_api_url
    );

    let state = AppState {
        model: Arc::new(model),
        store: Arc::new(store),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
