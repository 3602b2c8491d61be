//! Application State

use std::sync::Arc;

use seo_core::SuggestionGenerator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SEO suggestion engine (cache + retry + provider)
    pub generator: Arc<SuggestionGenerator>,
}
