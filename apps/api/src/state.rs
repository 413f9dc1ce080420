use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerationCapability;
use crate::search_client::SearchCapability;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both upstream capabilities are trait objects constructed once in `main`
/// and passed down explicitly — there is no ambient global client.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn SearchCapability>,
    pub generator: Arc<dyn GenerationCapability>,
    /// Kept for handlers that need runtime settings beyond the clients.
    #[allow(dead_code)]
    pub config: Config,
}
