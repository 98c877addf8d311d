//! # APEER Rerank
//!
//! A Cohere-compatible rerank gateway backed by a generative model.
//!
//! Instead of scoring documents with an embedding model, the gateway asks a
//! completion model (Gemini on Vertex AI) to order them with a listwise
//! RankGPT/APEER prompt, parses the `[rankstart] 2 > 0 > 1 [rankend]` reply,
//! and answers in the shape rerank clients already understand.
//!
//! ## Features
//!
//! - **Cohere Compatible**: `POST /rerank` and `POST /v1/rerank` accept and
//!   return the Cohere rerank wire format
//! - **Single Call**: one completion request per rerank request, no batching
//! - **Checked Rankings**: replies that are not a permutation of the input
//!   are rejected (configurable)
//! - **Pluggable Backend**: anything implementing [`CompletionProvider`]
//!
//! ## Library Use
//!
//! ```rust,no_run
//! use apeer_rerank::core::providers::{VertexAIProvider, VertexAIProviderConfig};
//! use apeer_rerank::core::rerank::{RerankRequest, RerankService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = VertexAIProvider::from_env(VertexAIProviderConfig {
//!         project_id: "my-project".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//!     let service = RerankService::new(Arc::new(provider));
//!     let response = service
//!         .rerank(&RerankRequest::new(
//!             "capital of France",
//!             ["Berlin is in Germany.", "Paris is the capital of France."],
//!         ))
//!         .await?;
//!
//!     println!("Most relevant: {}", response.results[0].index);
//!     Ok(())
//! }
//! ```
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use apeer_rerank::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::rerank::{RerankRequest, RerankResponse, RerankService};
pub use core::traits::CompletionProvider;
pub use utils::error::{GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: Option<&'static str>,
    /// Git commit hash
    pub git_hash: Option<&'static str>,
    /// Rust version
    pub rust_version: Option<&'static str>,
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: option_env!("BUILD_TIME"),
        git_hash: option_env!("GIT_HASH").filter(|h| *h != "unknown"),
        rust_version: option_env!("RUST_VERSION").filter(|v| *v != "unknown"),
    }
}
