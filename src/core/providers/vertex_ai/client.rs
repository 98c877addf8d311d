//! Vertex AI Client Implementation

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::{
    VertexAIProviderConfig,
    auth::VertexAuth,
    error::VertexAIError,
    types::{GenerateContentRequest, GenerateContentResponse},
};
use crate::core::traits::CompletionProvider;
use crate::utils::error::Result;

/// Vertex AI Provider implementation
#[derive(Debug, Clone)]
pub struct VertexAIProvider {
    config: VertexAIProviderConfig,
    auth: Arc<VertexAuth>,
    http_client: Client,
}

impl VertexAIProvider {
    /// Create a new Vertex AI provider
    pub fn new(config: VertexAIProviderConfig, auth: VertexAuth) -> std::result::Result<Self, VertexAIError> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| VertexAIError::Configuration(e.to_string()))?;

        Ok(Self {
            config,
            auth: Arc::new(auth),
            http_client,
        })
    }

    /// Create a provider with credentials discovered from the environment
    pub async fn from_env(config: VertexAIProviderConfig) -> std::result::Result<Self, VertexAIError> {
        let auth = VertexAuth::from_env()
            .await
            .map_err(|e| VertexAIError::Authentication(format!("{:#}", e)))?;
        debug!("Vertex AI credentials: {}", auth.describe());
        Self::new(config, auth)
    }

    pub fn config(&self) -> &VertexAIProviderConfig {
        &self.config
    }

    /// Build the `generateContent` URL for a model
    pub fn build_url(&self, model: &str) -> String {
        if let Some(ref api_base) = self.config.api_base {
            return format!("{}/{}:generateContent", api_base.trim_end_matches('/'), model);
        }

        let location = &self.config.location;
        format!(
            "https://{}-aiplatform.googleapis.com/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            location, self.config.project_id, location, model
        )
    }

    /// Send one `generateContent` call and return the first candidate's text
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
    ) -> std::result::Result<String, VertexAIError> {
        let token = self
            .auth
            .get_access_token()
            .await
            .map_err(|e| VertexAIError::Authentication(format!("{:#}", e)))?;

        let url = self.build_url(model);
        debug!("Making request to Vertex AI: {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(VertexAIError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        body.first_text()
            .map(str::to_string)
            .ok_or(VertexAIError::NoContent)
    }
}

#[async_trait]
impl CompletionProvider for VertexAIProvider {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        Ok(self.generate_content(model, prompt).await?)
    }

    fn provider_name(&self) -> &'static str {
        "vertex_ai"
    }
}
