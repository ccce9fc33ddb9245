//! Axum route handlers for the HTML preview.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{not_found_document, preview_document, preview_site_url, render_project};
use crate::state::AppState;

/// GET /preview/:id
///
/// Renders the stored project through its layout. An id that is not a UUID, or that
/// names no project, gets the "Project not found" page with a 404.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(project_id) = Uuid::parse_str(&raw_id) else {
        debug!("Preview requested for malformed id {raw_id:?}");
        return Ok(not_found());
    };

    let Some(project) = state.store.get_project(project_id).await? else {
        debug!("Preview requested for unknown project {project_id}");
        return Ok(not_found());
    };

    let page = render_project(&project);
    let html = preview_document(&page, &preview_site_url(&project.business_name));

    Ok(Html(html).into_response())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(not_found_document())).into_response()
}
