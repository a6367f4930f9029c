use std::sync::Arc;

use crate::catalog::Catalog;
use crate::intent::extractor::IntentExtractor;
use crate::recommend::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<Catalog>,
    /// TF-IDF space fitted over `catalog`.
    pub recommender: Arc<Recommender>,
    /// Pluggable extractor. Default: LlmIntentExtractor.
    pub extractor: Arc<dyn IntentExtractor>,
}
