//! Rerank types and data structures
//!
//! The wire shapes follow the Cohere rerank contract so the gateway can stand
//! in for an embedding-based reranker without client changes.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Decode an absent or `null` field as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rerank request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RerankRequest {
    /// Requested model name (accepted for compatibility, not used for routing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// The query to compare documents against
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,

    /// List of documents to rerank
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<String>,

    /// Number of top results to return (default: all documents)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<i64>,

    /// Fields to rank on (accepted for compatibility, unused)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_fields: Option<Vec<String>>,

    /// Whether to return the document text in results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_documents: Option<bool>,

    /// Maximum number of chunks per document (accepted for compatibility, unused)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chunks_per_doc: Option<i64>,
}

impl RerankRequest {
    /// Create a request for `query` over `documents` with default options
    pub fn new<I, S>(query: impl Into<String>, documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            query: query.into(),
            documents: documents.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// `top_n` clamped to `[0, documents.len()]`
    pub fn effective_top_n(&self) -> Option<usize> {
        self.top_n.map(|n| {
            let len = self.documents.len();
            usize::try_from(n).map_or(0, |n| n.min(len))
        })
    }

    /// Document text is returned unless the caller explicitly opted out
    pub fn include_documents(&self) -> bool {
        self.return_documents.unwrap_or(true)
    }
}

/// A candidate document tagged with its original position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passage<'a> {
    /// 0-based index into the request's document list
    pub id: usize,
    /// Document text
    pub content: &'a str,
}

impl<'a> Passage<'a> {
    /// Build passages in input order
    pub fn from_documents(documents: &'a [String]) -> Vec<Self> {
        documents
            .iter()
            .enumerate()
            .map(|(id, content)| Self {
                id,
                content: content.as_str(),
            })
            .collect()
    }
}

/// Document echoed back in a rerank result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankDocument {
    /// Document text content
    pub text: String,

    /// Additional metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, serde_json::Value>,
}

impl RerankDocument {
    /// Create a plain text document
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: content.into(),
            meta: HashMap::new(),
        }
    }
}

/// Rerank response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerankResponse {
    /// Unique response ID
    pub id: String,

    /// Reranked results ordered by relevance (highest first)
    pub results: Vec<RerankResult>,

    /// Response metadata
    pub meta: RerankMeta,
}

/// Individual rerank result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankResult {
    /// The document text (if return_documents was not false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<RerankDocument>,

    /// Original index of the document in the input list
    pub index: usize,

    /// Rank-derived score in (0, 1]
    ///
    /// This is `(N - position) / N` over the ranked list, not a calibrated
    /// probability. Consumers that threshold on confidence should treat it as
    /// an ordinal signal only.
    pub relevance_score: f64,
}

/// Response metadata block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RerankMeta {
    pub api_version: ApiVersion,
    pub billed_units: BilledUnits,
    pub tokens: TokenUsage,
    pub warnings: Vec<String>,
}

/// API version descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiVersion {
    pub version: String,
    pub is_deprecated: bool,
    pub is_experimental: bool,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            is_deprecated: false,
            is_experimental: false,
        }
    }
}

/// Billing counters (token accounting against the completion backend is not
/// tracked, so these are always zero)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BilledUnits {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub search_units: u32,
    pub classifications: u32,
}

/// Token counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}
