//! Utility modules for the rerank gateway
//!
//! - **error**: gateway error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging setup
