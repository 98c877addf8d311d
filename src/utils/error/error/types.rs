//! Core error types for the gateway

use crate::core::rerank::{ParseError, RankingError};
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed inbound request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Inbound request used an unsupported HTTP method
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// The completion backend failed (network, status, or decoding)
    #[error("error calling LLM: {0}")]
    Completion(String),

    /// The completion text did not contain a well-formed ranking
    #[error("error parsing LLM response: {0}")]
    Protocol(#[from] ParseError),

    /// The parsed ranking does not fit the submitted documents
    #[error("invalid ranking: {0}")]
    Ranking(#[from] RankingError),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Server lifecycle errors
    #[error("Server error: {0}")]
    Server(String),
}
