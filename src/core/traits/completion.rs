//! Completion boundary
//!
//! The rerank protocol only needs one capability from a language model: turn
//! a prompt into generated text. Everything behind that call (credentials,
//! transport, model-specific payloads) belongs to the implementing provider.

use crate::utils::error::Result;
use async_trait::async_trait;

/// A remote text-completion capability
///
/// Implementations must be safe to share across request handlers; the
/// gateway keeps one instance behind an `Arc` for the lifetime of the process.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for `prompt` with the given model
    ///
    /// Failures of any kind (transport, non-success status, undecodable
    /// payload, empty reply) are returned as errors. Implementations must not
    /// retry.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
