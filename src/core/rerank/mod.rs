//! LLM-backed listwise reranking
//!
//! Documents are ranked by asking a completion model to order them. The
//! model sees an APEER/RankGPT prompt with each document tagged by its
//! position and answers with `[rankstart] 2 > 0 > 1 [rankend]`. The parsed
//! order is turned into a Cohere-compatible rerank response, so callers can
//! swap this in for an embedding-based reranker.
//!
//! ## Example
//! ```rust,ignore
//! use apeer_rerank::core::rerank::{RerankRequest, RerankService};
//!
//! let service = RerankService::new(provider).with_timeout(Duration::from_secs(10));
//! let request = RerankRequest::new(
//!     "capital of France",
//!     ["Paris is the capital of France.", "Berlin is in Germany."],
//! );
//!
//! let response = service.rerank(&request).await?;
//! assert_eq!(response.results[0].index, 0);
//! ```

mod assembler;
mod parser;
mod prompt;
mod service;
mod types;
mod validation;


pub use assembler::{assemble_response, assemble_results, relevance_score, truncate_results};
pub use parser::{ParseError, parse_ranking};
pub use prompt::{QUERY_END, QUERY_START, RANK_END, RANK_START, build_prompt};
pub use service::{DEFAULT_MODEL, DEFAULT_TIMEOUT, RerankService};
pub use types::{
    ApiVersion, BilledUnits, Passage, RerankDocument, RerankMeta, RerankRequest, RerankResponse,
    RerankResult, TokenUsage,
};
pub use validation::{RankingError, RankingValidation, validate_ranking};
