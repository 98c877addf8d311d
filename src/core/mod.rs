//! Core functionality for the rerank gateway
//!
//! This module contains the reranking protocol, the completion boundary and
//! the completion providers that implement it.

pub mod providers;
pub mod rerank; // Listwise LLM rerank protocol
pub mod traits;
