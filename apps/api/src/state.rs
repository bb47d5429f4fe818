use std::sync::Arc;

use crate::llm_client::TextModel;
use crate::portfolio::themes::ThemeRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model seam. `LlmClient` in production, a scripted double in tests.
    pub model: Arc<dyn TextModel>,
    pub themes: Arc<ThemeRegistry>,
}
