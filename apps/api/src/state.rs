use std::sync::Arc;

use crate::llm_client::CompletionModel;
use crate::store::ProjectStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both clients are built once in `main` and shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Hosted completion model. Default: `LlmClient` against the Hugging Face router.
    pub model: Arc<dyn CompletionModel>,
    /// Project persistence. Default: `PgProjectStore`.
    pub store: Arc<dyn ProjectStore>,
}
