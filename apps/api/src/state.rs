use std::sync::Arc;

use crate::analysis::keywords::KeywordCatalog;
use crate::analysis::scoring::{KeywordScorer, ProfileScorer};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable category scorer. Default: KeywordScorer over the configured catalog.
    pub scorer: Arc<dyn ProfileScorer>,
}

impl AppState {
    pub fn new(config: Config, catalog: KeywordCatalog) -> Self {
        Self {
            config,
            scorer: Arc::new(KeywordScorer::new(Arc::new(catalog))),
        }
    }
}
