//! Response assembly

use super::types::{RerankDocument, RerankMeta, RerankResponse, RerankResult};
use uuid::Uuid;

/// Rank-derived score for output position `position` out of `total`
pub fn relevance_score(position: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (total - position) as f64 / total as f64
}

/// Pair ranked indices with scores, attaching document text when requested
///
/// Every index must be in range for `documents`; callers validate first.
pub fn assemble_results(
    ranking: &[usize],
    documents: &[String],
    include_documents: bool,
) -> Vec<RerankResult> {
    let total = ranking.len();
    ranking
        .iter()
        .enumerate()
        .map(|(position, &index)| RerankResult {
            document: include_documents
                .then(|| documents.get(index).map(RerankDocument::text))
                .flatten(),
            index,
            relevance_score: relevance_score(position, total),
        })
        .collect()
}

/// Keep the first `top_n` results; a larger or absent `top_n` is a no-op
pub fn truncate_results(results: &mut Vec<RerankResult>, top_n: Option<usize>) {
    if let Some(n) = top_n {
        results.truncate(n);
    }
}

/// Wrap results in the response envelope with a fresh id
pub fn assemble_response(results: Vec<RerankResult>) -> RerankResponse {
    RerankResponse {
        id: Uuid::new_v4().to_string(),
        results,
        meta: RerankMeta::default(),
    }
}
