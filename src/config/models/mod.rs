//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod logging;
pub mod rerank;
pub mod server;
pub mod vertex;

// Re-export all configuration types
pub use logging::*;
pub use rerank::*;
pub use server::*;
pub use vertex::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Default completion timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_location() -> String {
    crate::core::providers::vertex_ai::DEFAULT_LOCATION.to_string()
}

pub fn default_model() -> String {
    crate::core::rerank::DEFAULT_MODEL.to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
