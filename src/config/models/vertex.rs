//! Vertex AI backend configuration

use super::*;
use crate::core::providers::vertex_ai::VertexAIProviderConfig;
use serde::{Deserialize, Serialize};

/// Vertex AI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexConfig {
    /// Google Cloud project ID
    #[serde(default)]
    pub project_id: String,
    /// Vertex AI region
    #[serde(default = "default_location")]
    pub location: String,
    /// Gemini model used for ranking
    #[serde(default = "default_model")]
    pub model: String,
    /// Replaces the regional endpoint up to `/models` when set
    #[serde(default)]
    pub api_base: Option<String>,
    /// Send one test prompt at startup and refuse to start if it fails
    #[serde(default)]
    pub startup_probe: bool,
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            location: default_location(),
            model: default_model(),
            api_base: None,
            startup_probe: false,
        }
    }
}

impl VertexConfig {
    /// Provider settings with the HTTP client bounded by `timeout_seconds`
    pub fn provider_config(&self, timeout_seconds: u64) -> VertexAIProviderConfig {
        VertexAIProviderConfig {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
            api_base: self.api_base.clone(),
            timeout_seconds,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model cannot be empty".to_string());
        }
        if self.api_base.is_none() {
            if self.project_id.trim().is_empty() {
                return Err("Project ID is required (set PROJECT_ID)".to_string());
            }
            if self.location.trim().is_empty() {
                return Err("Location is required (set LOCATION)".to_string());
            }
        }
        Ok(())
    }
}
