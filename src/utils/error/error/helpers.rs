//! Helper functions for creating specific error types

use super::types::GatewayError;

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn method_not_allowed<S: Into<String>>(method: S) -> Self {
        Self::MethodNotAllowed(method.into())
    }

    pub fn completion<S: Into<String>>(message: S) -> Self {
        Self::Completion(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Whether this error was produced while reranking (as opposed to
    /// request decoding or process setup)
    pub fn is_rerank_failure(&self) -> bool {
        matches!(
            self,
            Self::Completion(_) | Self::Protocol(_) | Self::Ranking(_) | Self::Timeout(_)
        )
    }
}
