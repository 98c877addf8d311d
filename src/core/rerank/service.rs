//! Rerank service
//!
//! Drives one rerank request end to end: prompt, a single completion call
//! under a deadline, parse, validate, assemble.

use super::assembler::{assemble_response, assemble_results, truncate_results};
use super::parser::parse_ranking;
use super::prompt::build_prompt;
use super::types::{Passage, RerankRequest, RerankResponse};
use super::validation::{RankingValidation, validate_ranking};
use crate::core::traits::CompletionProvider;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default deadline for the completion call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default completion model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// LLM-backed listwise reranker
#[derive(Clone)]
pub struct RerankService {
    /// Completion backend
    provider: Arc<dyn CompletionProvider>,

    /// Model passed to the backend on every call
    model: String,

    /// Deadline for the completion call
    timeout: Duration,

    /// Ranking check applied before assembly
    validation: RankingValidation,
}

impl std::fmt::Debug for RerankService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RerankService")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("validation", &self.validation)
            .finish()
    }
}

impl RerankService {
    /// Create a new rerank service with default model, timeout and validation
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            validation: RankingValidation::default(),
        }
    }

    /// Set the completion model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the completion deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the ranking validation mode
    pub fn with_validation(mut self, validation: RankingValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn validation(&self) -> RankingValidation {
        self.validation
    }

    /// Rerank a wire request into a wire response
    pub async fn rerank(&self, request: &RerankRequest) -> Result<RerankResponse> {
        let start = Instant::now();

        let ranking = self.rank(&request.query, &request.documents).await?;

        let mut results = assemble_results(&ranking, &request.documents, request.include_documents());
        truncate_results(&mut results, request.effective_top_n());

        info!(
            "Rerank completed in {:?}: {} documents -> {} results",
            start.elapsed(),
            request.documents.len(),
            results.len()
        );

        Ok(assemble_response(results))
    }

    /// Rank `documents` against `query`, returning document indices most
    /// relevant first
    ///
    /// The completion backend is called exactly once, or not at all when
    /// there is nothing to rank.
    pub async fn rank(&self, query: &str, documents: &[String]) -> Result<Vec<usize>> {
        if documents.is_empty() {
            debug!("No documents to rank, skipping completion call");
            return Ok(Vec::new());
        }

        let passages = Passage::from_documents(documents);
        let prompt = build_prompt(query, &passages);
        debug!(
            provider = self.provider.provider_name(),
            model = %self.model,
            prompt_len = prompt.len(),
            "Requesting ranking for {} passages",
            passages.len()
        );

        let completion = tokio::time::timeout(self.timeout, self.provider.complete(&self.model, &prompt))
            .await
            .map_err(|_| {
                GatewayError::timeout(format!("completion timed out after {:?}", self.timeout))
            })??;

        let ids = parse_ranking(&completion).inspect_err(|e| {
            warn!("Unparsable ranking from {}: {}", self.provider.provider_name(), e);
            debug!("Completion text: {}", completion);
        })?;

        let ranking = validate_ranking(&ids, documents.len(), self.validation).inspect_err(|e| {
            warn!("Rejected ranking {:?}: {}", ids, e);
        })?;

        Ok(ranking)
    }
}
