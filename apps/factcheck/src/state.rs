use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote generation backend. `GeminiClient` in production, a recording stub in tests.
    pub generator: Arc<dyn TextGenerator>,
}
