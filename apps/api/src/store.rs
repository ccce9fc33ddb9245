//! Persistence gateway for the `projects` table.
//!
//! Projects are write-once: there is an insert and a point lookup, nothing else.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::models::project::{NewProject, Project, ProjectId, ProjectRow};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage backend for projects.
///
/// Carried in `AppState` as `Arc<dyn ProjectStore>`.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Inserts a project and returns its id once the store has acknowledged the write.
    async fn create_project(&self, project: &NewProject) -> Result<ProjectId, StoreError>;

    /// Point lookup. `Ok(None)` means no such project, which is not an error.
    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>, StoreError>;
}

/// Postgres-backed store. Schema lives in `migrations/` and is applied by the `migrate` binary.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn create_project(&self, project: &NewProject) -> Result<ProjectId, StoreError> {
        let id: ProjectId = sqlx::query_scalar(
            r#"
            INSERT INTO projects
                (business_name, industry, audience, keywords, tone,
                 layout, color_theme, mode, content)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&project.business_name)
        .bind(&project.industry)
        .bind(&project.audience)
        .bind(&project.keywords)
        .bind(&project.tone)
        .bind(&project.layout)
        .bind(&project.color_theme)
        .bind(project.mode.as_str())
        .bind(Json(&project.content))
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted project {id}");
        Ok(id)
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, business_name, industry, audience, keywords, tone,
                   layout, color_theme, mode, content, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Project::from))
    }
}
