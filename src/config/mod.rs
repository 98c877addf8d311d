//! Configuration management for the gateway
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then environment variables (including anything loaded from `.env`).
//!
//! | Variable            | Field                      |
//! |---------------------|----------------------------|
//! | `PROJECT_ID`        | `vertex.project_id`        |
//! | `LOCATION`          | `vertex.location`          |
//! | `VERTEX_MODEL`      | `vertex.model`             |
//! | `VERTEX_API_BASE`   | `vertex.api_base`          |
//! | `HOST`              | `server.host`              |
//! | `PORT`              | `server.port`              |
//! | `RERANK_TIMEOUT`    | `rerank.timeout_seconds`   |
//! | `RERANK_VALIDATION` | `rerank.validation`        |
//! | `LOG_LEVEL`         | `logging.level`            |
//! | `LOG_FORMAT`        | `logging.format`           |

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub vertex: VertexConfig,
    #[serde(default)]
    pub rerank: RerankConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load the full configuration stack and validate it
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let config = Self::resolve(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Layer defaults, file and environment without validating
    ///
    /// An explicitly given `path` must exist. Without one, the default path
    /// is used if present and silently skipped otherwise.
    pub async fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path).await?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH).await?
            }
            None => {
                debug!("No configuration file, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from file, without validating
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Overlay values found through `lookup`; empty values are ignored
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("PROJECT_ID") {
            self.vertex.project_id = v;
        }
        if let Some(v) = get("LOCATION") {
            self.vertex.location = v;
        }
        if let Some(v) = get("VERTEX_MODEL") {
            self.vertex.model = v;
        }
        if let Some(v) = get("VERTEX_API_BASE") {
            self.vertex.api_base = Some(v);
        }
        if let Some(v) = get("HOST") {
            self.server.host = v;
        }
        if let Some(v) = get("PORT") {
            self.server.port = parse_var("PORT", &v)?;
        }
        if let Some(v) = get("RERANK_TIMEOUT") {
            self.rerank.timeout_seconds = parse_var("RERANK_TIMEOUT", &v)?;
        }
        if let Some(v) = get("RERANK_VALIDATION") {
            self.rerank.validation = parse_var("RERANK_VALIDATION", &v)?;
        }
        if let Some(v) = get("LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = get("LOG_FORMAT") {
            self.logging.format = parse_var("LOG_FORMAT", &v)?;
        }
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.vertex
            .validate()
            .map_err(|e| GatewayError::Config(format!("Vertex config error: {}", e)))?;

        self.rerank
            .validate()
            .map_err(|e| GatewayError::Config(format!("Rerank config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {} '{}': {}", key, value, e)))
}
