//! Axum route handlers for the Projects API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{
    generate_landing_page, GenerationErrorKind, GenerationFailure, GenerationRequest,
};
use crate::models::project::{Project, ProjectId};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of every generation response. Exactly one of `project_id` and
/// `error_kind`/`message` is present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<GenerationErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl GenerateResponse {
    fn created(project_id: ProjectId) -> Self {
        Self {
            success: true,
            project_id: Some(project_id),
            error_kind: None,
            message: None,
        }
    }

    fn failed(kind: GenerationErrorKind) -> Self {
        Self {
            success: false,
            project_id: None,
            error_kind: Some(kind),
            message: Some(GenerationFailure::USER_MESSAGE),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/projects/generate
///
/// Runs the full pipeline for one form submission. A failed run writes nothing and
/// answers with the generic user message; the cause stays in the logs.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let blank = request.blank_fields();
    if !blank.is_empty() {
        return Err(AppError::Validation(format!(
            "{} cannot be empty",
            blank.join(", ")
        )));
    }

    let response =
        match generate_landing_page(state.model.as_ref(), state.store.as_ref(), &request).await {
            Ok(project_id) => (
                StatusCode::CREATED,
                Json(GenerateResponse::created(project_id)),
            ),
            Err(failure) => {
                let status = match failure.kind {
                    GenerationErrorKind::PersistenceError => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, Json(GenerateResponse::failed(failure.kind)))
            }
        };

    Ok(response.into_response())
}

/// GET /api/v1/projects/:id
///
/// Returns the stored project as written at generation time. An id that is not a
/// UUID is reported as not found, like an unknown one.
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let project_id = Uuid::parse_str(&raw_id)
        .map_err(|_| AppError::NotFound(format!("Project {raw_id} not found")))?;

    let project = state
        .store
        .get_project(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))?;

    Ok(Json(project))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        Router,
    };
    use chrono::Utc;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::models::content::DisplayMode;
    use crate::routes::build_router;
    use crate::test_utils::{
        sample_content, test_state, InMemoryProjectStore, ScriptedModel, VALID_CONTENT_JSON,
    };

    fn app(model: &Arc<ScriptedModel>, store: &Arc<InMemoryProjectStore>) -> Router {
        build_router(test_state(model.clone(), store.clone()))
    }

    fn generate_request(body: Value) -> Request<Body> {
        Request::post("/api/v1/projects/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn form(layout: &str) -> Value {
        json!({
            "businessName": "Acme",
            "industry": "SaaS",
            "audience": "SMBs",
            "keywords": "fast,simple",
            "tone": "Bold",
            "layout": layout,
            "colorTheme": "Red"
        })
    }

    fn stored_project() -> Project {
        Project {
            id: Uuid::new_v4(),
            business_name: "Acme Labs".to_string(),
            industry: "SaaS".to_string(),
            audience: "SMBs".to_string(),
            keywords: "fast,simple".to_string(),
            tone: "Friendly".to_string(),
            layout: "Minimal".to_string(),
            color_theme: "Green".to_string(),
            mode: DisplayMode::Dark,
            content: sample_content(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_generate_returns_project_id() {
        let model = Arc::new(ScriptedModel::replying(VALID_CONTENT_JSON.to_string()));
        let store = Arc::new(InMemoryProjectStore::default());

        let response = app(&model, &store)
            .oneshot(generate_request(form("Bold")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body.get("errorKind").is_none());

        let id: Uuid = body["projectId"].as_str().unwrap().parse().unwrap();
        let project = store.get(id).unwrap();
        assert_eq!(project.mode, DisplayMode::Light);
        assert_eq!(project.color_theme, "Red");
    }

    #[tokio::test]
    async fn test_generate_unparsable_output_reports_failure_without_row() {
        let model = Arc::new(ScriptedModel::replying(
            "Sorry, I can't help with that.".to_string(),
        ));
        let store = Arc::new(InMemoryProjectStore::default());

        let response = app(&model, &store)
            .oneshot(generate_request(form("Modern")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["errorKind"], "MalformedGeneration");
        assert_eq!(body["message"], GenerationFailure::USER_MESSAGE);
        assert!(body.get("projectId").is_none());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_generate_model_outage_is_bad_gateway() {
        let model = Arc::new(ScriptedModel::unavailable());
        let store = Arc::new(InMemoryProjectStore::default());

        let response = app(&model, &store)
            .oneshot(generate_request(form("Modern")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["errorKind"], "ModelUnavailable");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_store_failure_is_internal_error() {
        let model = Arc::new(ScriptedModel::replying(VALID_CONTENT_JSON.to_string()));
        let store = Arc::new(InMemoryProjectStore::failing_writes());

        let response = app(&model, &store)
            .oneshot(generate_request(form("Modern")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["errorKind"], "PersistenceError");
    }

    #[tokio::test]
    async fn test_generate_blank_field_is_rejected_before_model_call() {
        let model = Arc::new(ScriptedModel::replying(VALID_CONTENT_JSON.to_string()));
        let store = Arc::new(InMemoryProjectStore::default());
        let mut body = form("Modern");
        body["industry"] = json!("   ");

        let response = app(&model, &store)
            .oneshot(generate_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("industry"));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_missing_field_is_validation_error() {
        let model = Arc::new(ScriptedModel::replying(VALID_CONTENT_JSON.to_string()));
        let store = Arc::new(InMemoryProjectStore::default());
        let mut body = form("Modern");
        body.as_object_mut().unwrap().remove("tone");

        let response = app(&model, &store)
            .oneshot(generate_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("tone"));
        assert_eq!(model.call_count(), 0);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_generate_unreadable_body_is_validation_error() {
        let model = Arc::new(ScriptedModel::replying(VALID_CONTENT_JSON.to_string()));
        let store = Arc::new(InMemoryProjectStore::default());
        let request = Request::post("/api/v1/projects/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"businessName\": "))
            .unwrap();

        let response = app(&model, &store).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_project_returns_stored_fields() {
        let model = Arc::new(ScriptedModel::empty());
        let store = Arc::new(InMemoryProjectStore::default());
        let project = stored_project();
        store.seed(project.clone());

        let response = app(&model, &store)
            .oneshot(get(&format!("/api/v1/projects/{}", project.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let fetched: Project = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(fetched, project);
    }

    #[tokio::test]
    async fn test_get_project_is_repeatable() {
        let model = Arc::new(ScriptedModel::empty());
        let store = Arc::new(InMemoryProjectStore::default());
        let project = stored_project();
        store.seed(project.clone());
        let router = app(&model, &store);
        let uri = format!("/api/v1/projects/{}", project.id);

        let first = body_bytes(router.clone().oneshot(get(&uri)).await.unwrap()).await;
        let second = body_bytes(router.oneshot(get(&uri)).await.unwrap()).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_project_is_not_found() {
        let model = Arc::new(ScriptedModel::empty());
        let store = Arc::new(InMemoryProjectStore::default());
        let missing = Uuid::new_v4();

        let response = app(&model, &store)
            .oneshot(get(&format!("/api/v1/projects/{missing}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");

        let response = app(&model, &store)
            .oneshot(get(&format!("/preview/{missing}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("Project not found"));
    }

    #[tokio::test]
    async fn test_get_project_malformed_id_is_not_found() {
        let model = Arc::new(ScriptedModel::empty());
        let store = Arc::new(InMemoryProjectStore::default());

        let response = app(&model, &store)
            .oneshot(get("/api/v1/projects/not-a-uuid"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_preview_malformed_id_is_not_found_page() {
        let model = Arc::new(ScriptedModel::empty());
        let store = Arc::new(InMemoryProjectStore::default());

        let response = app(&model, &store)
            .oneshot(get("/preview/not-a-uuid"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("Project not found"));
    }

    #[tokio::test]
    async fn test_preview_renders_stored_layout() {
        let model = Arc::new(ScriptedModel::empty());
        let store = Arc::new(InMemoryProjectStore::default());
        let project = stored_project();
        store.seed(project.clone());

        let response = app(&model, &store)
            .oneshot(get(&format!("/preview/{}", project.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("layout-minimal"));
        assert!(html.contains("<title>Launch in minutes - Preview</title>"));
        assert!(html.contains("https://acmelabs.com"));
    }

    #[tokio::test]
    async fn test_store_read_failure_is_internal_error() {
        let model = Arc::new(ScriptedModel::empty());
        let store = Arc::new(InMemoryProjectStore::failing_reads());

        let response = app(&model, &store)
            .oneshot(get(&format!("/api/v1/projects/{}", Uuid::new_v4())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"]["code"], "PERSISTENCE_ERROR");
    }
}
