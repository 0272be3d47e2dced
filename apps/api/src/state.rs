use std::sync::Arc;

use crate::config::Config;
use crate::extraction::RequirementExtractor;
use crate::scoring::ScoringConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Fixed scoring constants. Shared, never mutated after startup.
    pub scoring: Arc<ScoringConfig>,
    /// Pluggable extractor. `None` when no LLM key is configured.
    pub extractor: Option<Arc<dyn RequirementExtractor>>,
}

impl AppState {
    pub fn new(config: Config, extractor: Option<Arc<dyn RequirementExtractor>>) -> Self {
        Self {
            config,
            scoring: Arc::new(ScoringConfig::default()),
            extractor,
        }
    }
}
