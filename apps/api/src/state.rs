use std::sync::Arc;

use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream chat-completion client, behind a trait object so handler
    /// tests can substitute a stub backend.
    pub llm: Arc<dyn ChatCompletion>,
}
