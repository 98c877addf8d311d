//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::rerank::RerankService;
use crate::core::traits::CompletionProvider;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Reranker bound to the configured completion backend
    pub reranker: Arc<RerankService>,
}

impl AppState {
    /// Build state from configuration and a completion backend
    pub fn new(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        let reranker = RerankService::new(provider)
            .with_model(config.vertex.model.clone())
            .with_timeout(config.rerank.timeout())
            .with_validation(config.rerank.validation);

        Self {
            config: Arc::new(config),
            reranker: Arc::new(reranker),
        }
    }
}
