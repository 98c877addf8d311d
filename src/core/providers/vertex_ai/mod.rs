//! Google Vertex AI Provider Implementation
//!
//! Gemini `generateContent` behind the [`CompletionProvider`] boundary.
//!
//! [`CompletionProvider`]: crate::core::traits::CompletionProvider

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::{VertexAuth, VertexCredentials};
pub use client::VertexAIProvider;
pub use error::VertexAIError;

/// Default Vertex AI region
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Main VertexAI Provider Configuration
#[derive(Debug, Clone)]
pub struct VertexAIProviderConfig {
    /// Google Cloud Project ID
    pub project_id: String,

    /// Vertex AI region (e.g., "us-central1")
    pub location: String,

    /// Custom API endpoint (optional)
    pub api_base: Option<String>,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for VertexAIProviderConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            api_base: None,
            timeout_seconds: 30,
        }
    }
}

impl VertexAIProviderConfig {
    pub fn validate(&self) -> Result<(), VertexAIError> {
        // A custom base already encodes project and location
        if self.api_base.is_some() {
            return Ok(());
        }
        if self.project_id.is_empty() {
            return Err(VertexAIError::Configuration(
                "Project ID is required".to_string(),
            ));
        }
        if self.location.is_empty() {
            return Err(VertexAIError::Configuration("Location is required".to_string()));
        }
        Ok(())
    }
}
