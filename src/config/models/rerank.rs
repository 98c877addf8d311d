//! Rerank behaviour configuration

use super::*;
use crate::core::rerank::RankingValidation;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rerank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankConfig {
    /// Deadline for the completion call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// How parsed rankings are checked against the documents
    #[serde(default)]
    pub validation: RankingValidation,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            validation: RankingValidation::default(),
        }
    }
}

impl RerankConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_seconds == 0 {
            return Err("Timeout cannot be 0".to_string());
        }
        Ok(())
    }
}
