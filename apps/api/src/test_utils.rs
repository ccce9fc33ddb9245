//! Shared test doubles: a scripted model, an in-memory project store, and an `AppState`
//! wired to both.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::generation::generator::GenerationRequest;
use crate::llm_client::{CompletionModel, LlmError};
use crate::models::content::GeneratedContent;
use crate::models::project::{NewProject, Project, ProjectId};
use crate::state::AppState;
use crate::store::{ProjectStore, StoreError};

pub const VALID_CONTENT_JSON: &str = r#"{
  "hero_headline": "Launch in minutes",
  "sub_headline": "The simplest way for SMBs to get online",
  "cta_text": "Start free",
  "features": ["Fast setup", "No code required", "Simple pricing"],
  "seo_meta_description": "Acme helps SMBs launch fast, simple websites."
}"#;

pub fn acme_request(layout: &str) -> GenerationRequest {
    GenerationRequest {
        business_name: "Acme".to_string(),
        industry: "SaaS".to_string(),
        audience: "SMBs".to_string(),
        keywords: "fast,simple".to_string(),
        tone: "Bold".to_string(),
        layout: Some(layout.to_string()),
        color_theme: None,
    }
}

pub fn sample_content() -> GeneratedContent {
    GeneratedContent {
        hero_headline: "Launch in minutes".to_string(),
        sub_headline: "The simplest way for SMBs to get online".to_string(),
        cta_text: "Start free".to_string(),
        features: vec![
            "Fast setup".to_string(),
            "No code required".to_string(),
            "Simple pricing".to_string(),
        ],
        seo_meta_description: "Acme helps SMBs launch fast, simple websites.".to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Model
// ────────────────────────────────────────────────────────────────────────────

enum Reply {
    Text(String),
    Empty,
    Unavailable,
}

/// Returns the same scripted reply on every call and records what it was sent.
pub struct ScriptedModel {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<(String, String)>>,
}

impl ScriptedModel {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn replying(text: String) -> Self {
        Self::with_reply(Reply::Text(text))
    }

    pub fn empty() -> Self {
        Self::with_reply(Reply::Empty)
    }

    pub fn unavailable() -> Self {
        Self::with_reply(Reply::Unavailable)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(system, user)` from the most recent call.
    pub fn last_prompt(&self) -> Option<(String, String)> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some((system.to_string(), prompt.to_string()));

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Empty => Err(LlmError::EmptyContent),
            Reply::Unavailable => Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryProjectStore {
    projects: Mutex<HashMap<ProjectId, Project>>,
    fail_writes: bool,
    fail_reads: bool,
}

impl InMemoryProjectStore {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.lock().unwrap().len()
    }

    /// Inserts a fully-formed project directly, bypassing generation.
    pub fn seed(&self, project: Project) {
        self.projects.lock().unwrap().insert(project.id, project);
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn create_project(&self, project: &NewProject) -> Result<ProjectId, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }

        let id = Uuid::new_v4();
        let stored = Project {
            id,
            business_name: project.business_name.clone(),
            industry: project.industry.clone(),
            audience: project.audience.clone(),
            keywords: project.keywords.clone(),
            tone: project.tone.clone(),
            layout: project.layout.clone(),
            color_theme: project.color_theme.clone(),
            mode: project.mode,
            content: project.content.clone(),
            created_at: Utc::now(),
        };
        self.projects.lock().unwrap().insert(id, stored);
        Ok(id)
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.get(id))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// App state
// ────────────────────────────────────────────────────────────────────────────

pub fn test_state(model: Arc<ScriptedModel>, store: Arc<InMemoryProjectStore>) -> AppState {
    AppState { model, store }
}
