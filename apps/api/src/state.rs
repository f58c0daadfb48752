use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; submissions share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. `ChatCompletionClient` in production.
    pub completion: Arc<dyn CompletionClient>,
    pub config: Config,
}
