//! Test fixtures
//!
//! Requests and model replies shared by the integration tests.

use apeer_rerank::RerankRequest;
use apeer_rerank::core::rerank::{RANK_END, RANK_START};

/// Query used by most fixtures
pub const CAPITAL_QUERY: &str = "What is the capital of France?";

/// Three documents, only one of which answers [`CAPITAL_QUERY`]
pub fn capital_documents() -> Vec<String> {
    vec![
        "Berlin is the capital of Germany.".to_string(),
        "Paris is the capital and largest city of France.".to_string(),
        "The Eiffel Tower was completed in 1889.".to_string(),
    ]
}

/// Request over [`capital_documents`]
pub fn capital_request() -> RerankRequest {
    RerankRequest::new(CAPITAL_QUERY, capital_documents())
}

/// A well-formed model reply ranking `order`
pub fn ranking_reply(order: &[usize]) -> String {
    let ranking = order
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" > ");
    format!("Here is the ranking:\n{} {} {}", RANK_START, ranking, RANK_END)
}
