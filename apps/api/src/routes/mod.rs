pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::render::handlers::handle_preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Projects API
        .route(
            "/api/v1/projects/generate",
            post(handlers::handle_generate),
        )
        .route("/api/v1/projects/:id", get(handlers::handle_get_project))
        // Rendered landing pages
        .route("/preview/:id", get(handle_preview))
        .with_state(state)
}
