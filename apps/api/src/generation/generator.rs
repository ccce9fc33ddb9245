//! Landing-page generation: orchestrates the full pipeline for one submission.
//!
//! Flow: build prompt → call model → extract content → persist project.
//!
//! Stages run strictly in order and the store write is the last step, so a run either
//! produces exactly one `projects` row or none at all. No stage is retried; the user
//! resubmits instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::generation::extractor::{extract_content, ExtractError};
use crate::generation::prompts::build_generation_prompt;
use crate::llm_client::{CompletionModel, LlmError};
use crate::models::content::DisplayMode;
use crate::models::project::{NewProject, ProjectId};
use crate::store::ProjectStore;

pub const DEFAULT_LAYOUT: &str = "Modern";
pub const DEFAULT_COLOR_THEME: &str = "Blue";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Form submission for one landing page.
///
/// `tone` is passed to the model as-is. `layout` and `color_theme` are stored as given;
/// only a missing or empty value is replaced by its default here.
///
/// Required fields default to empty so that a missing field is reported by
/// `blank_fields` the same way as a blank one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, alias = "business_name")]
    pub business_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default, alias = "color_theme")]
    pub color_theme: Option<String>,
}

impl GenerationRequest {
    pub fn layout(&self) -> &str {
        non_empty(self.layout.as_deref()).unwrap_or(DEFAULT_LAYOUT)
    }

    pub fn color_theme(&self) -> &str {
        non_empty(self.color_theme.as_deref()).unwrap_or(DEFAULT_COLOR_THEME)
    }

    /// Names of required fields that are blank.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("businessName", &self.business_name),
            ("industry", &self.industry),
            ("audience", &self.audience),
            ("keywords", &self.keywords),
            ("tone", &self.tone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Pipeline position. `Done` is only reached on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationStage {
    Building,
    Invoking,
    Extracting,
    Persisting,
    Done,
}

/// Why a generation failed. Serialized into the submission response as `errorKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationErrorKind {
    ModelUnavailable,
    EmptyGeneration,
    MalformedGeneration,
    SchemaMismatch,
    PersistenceError,
}

/// A failed pipeline run. `detail` is for operators only and never reaches the client.
#[derive(Debug, Error)]
#[error("{kind:?} at {stage:?}: {detail}")]
pub struct GenerationFailure {
    pub stage: GenerationStage,
    pub kind: GenerationErrorKind,
    pub detail: String,
}

impl GenerationFailure {
    /// The only failure text shown to users.
    pub const USER_MESSAGE: &'static str = "Failed to generate landing page. Please try again.";

    fn new(stage: GenerationStage, kind: GenerationErrorKind, detail: impl Into<String>) -> Self {
        Self {
            stage,
            kind,
            detail: detail.into(),
        }
    }
}

impl From<LlmError> for GenerationFailure {
    fn from(e: LlmError) -> Self {
        let kind = match e {
            LlmError::EmptyContent => GenerationErrorKind::EmptyGeneration,
            LlmError::Http(_) | LlmError::Api { .. } => GenerationErrorKind::ModelUnavailable,
        };
        Self::new(GenerationStage::Invoking, kind, e.to_string())
    }
}

impl From<ExtractError> for GenerationFailure {
    fn from(e: ExtractError) -> Self {
        let kind = match e {
            ExtractError::Malformed(_) => GenerationErrorKind::MalformedGeneration,
            ExtractError::SchemaMismatch(_) => GenerationErrorKind::SchemaMismatch,
        };
        Self::new(GenerationStage::Extracting, kind, e.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the generation pipeline and persists the result.
///
/// Steps:
/// 1. build_generation_prompt() → PromptPair
/// 2. model.complete() → raw text (exactly one call)
/// 3. extract_content() → GeneratedContent
/// 4. store.create_project() → ProjectId
pub async fn generate_landing_page(
    model: &dyn CompletionModel,
    store: &dyn ProjectStore,
    request: &GenerationRequest,
) -> Result<ProjectId, GenerationFailure> {
    let result = run_pipeline(model, store, request).await;

    match &result {
        Ok(project_id) => info!(
            "Generated project {} for '{}' (layout={}, theme={})",
            project_id,
            request.business_name,
            request.layout(),
            request.color_theme()
        ),
        Err(failure) => error!(
            stage = ?failure.stage,
            kind = ?failure.kind,
            "Generation failed for '{}': {}",
            request.business_name,
            failure.detail
        ),
    }

    result
}

async fn run_pipeline(
    model: &dyn CompletionModel,
    store: &dyn ProjectStore,
    request: &GenerationRequest,
) -> Result<ProjectId, GenerationFailure> {
    // Step 1: Build prompt
    enter(GenerationStage::Building);
    let prompt = build_generation_prompt(request);

    // Step 2: Invoke model
    enter(GenerationStage::Invoking);
    let raw = model.complete(prompt.system, &prompt.user).await?;
    debug!("Model returned {} chars", raw.len());

    // Step 3: Extract + validate
    enter(GenerationStage::Extracting);
    let content = extract_content(&raw).map_err(|e| {
        debug!("Unusable model output: {raw}");
        GenerationFailure::from(e)
    })?;

    // Step 4: Persist (the only write)
    enter(GenerationStage::Persisting);
    let layout = request.layout().to_string();
    let new_project = NewProject {
        business_name: request.business_name.clone(),
        industry: request.industry.clone(),
        audience: request.audience.clone(),
        keywords: request.keywords.clone(),
        tone: request.tone.clone(),
        mode: DisplayMode::for_layout(&layout),
        layout,
        color_theme: request.color_theme().to_string(),
        content,
    };

    let project_id = store.create_project(&new_project).await.map_err(|e| {
        GenerationFailure::new(
            GenerationStage::Persisting,
            GenerationErrorKind::PersistenceError,
            e.to_string(),
        )
    })?;

    enter(GenerationStage::Done);
    Ok(project_id)
}

fn enter(stage: GenerationStage) {
    debug!(?stage, "Generation stage");
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
