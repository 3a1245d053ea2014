use emojisearch_common::AppConfig;
use emojisearch_engine::SearchEngine;
use std::sync::Arc;

/// Shared application state
///
/// The engine is built before the server binds and injected here, so every
/// worker shares one immutable index.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Search engine
    pub engine: Arc<SearchEngine>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, engine: Arc<SearchEngine>) -> Self {
        Self { config, engine }
    }
}
