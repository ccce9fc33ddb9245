use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::content::{DisplayMode, GeneratedContent};

/// Server-assigned project identifier.
pub type ProjectId = Uuid;

/// A row of the `projects` table, exactly as stored.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub business_name: String,
    pub industry: String,
    pub audience: String,
    pub keywords: String,
    pub tone: String,
    pub layout: String,
    pub color_theme: String,
    pub mode: String,
    pub content: Json<GeneratedContent>,
    pub created_at: DateTime<Utc>,
}

/// A persisted landing page. Written once at generation time, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub business_name: String,
    pub industry: String,
    pub audience: String,
    pub keywords: String,
    pub tone: String,
    /// Stored as submitted; unknown values fall back to Modern only at render time.
    pub layout: String,
    pub color_theme: String,
    pub mode: DisplayMode,
    pub content: GeneratedContent,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            business_name: row.business_name,
            industry: row.industry,
            audience: row.audience,
            keywords: row.keywords,
            tone: row.tone,
            layout: row.layout,
            color_theme: row.color_theme,
            mode: DisplayMode::from_stored(&row.mode),
            content: row.content.0,
            created_at: row.created_at,
        }
    }
}

/// Everything needed to insert a project. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub business_name: String,
    pub industry: String,
    pub audience: String,
    pub keywords: String,
    pub tone: String,
    pub layout: String,
    pub color_theme: String,
    pub mode: DisplayMode,
    pub content: GeneratedContent,
}
