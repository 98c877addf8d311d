//! Vertex AI Error types

use thiserror::Error;

/// Vertex AI specific errors
#[derive(Error, Debug)]
pub enum VertexAIError {
    /// Credentials could not be loaded or exchanged for a token
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the API
    #[error("API request failed with status {status_code}: {message}")]
    ApiError { status_code: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ResponseParsing(String),

    /// The response carried no candidate text
    #[error("no content in response")]
    NoContent,
}

impl From<reqwest::Error> for VertexAIError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::ResponseParsing(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
