use std::sync::Arc;

use crate::config::Config;
use crate::content::store::ContentStore;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Catalog backend. Postgres when DATABASE_URL is set, the seeded catalog otherwise.
    pub content: Arc<dyn ContentStore>,
    pub llm: LlmClient,
    pub config: Config,
}
