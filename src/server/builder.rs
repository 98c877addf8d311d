//! Server startup
//!
//! Wires configuration to the Vertex AI backend and runs the HTTP server.

use crate::config::Config;
use crate::core::providers::VertexAIProvider;
use crate::core::traits::CompletionProvider;
use crate::server::routes::rerank::RERANK_PATHS;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Prompt sent by the startup probe
pub const STARTUP_PROBE_PROMPT: &str = "Tell me a short joke";

/// Run the server with the Vertex AI backend
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting APEER rerank gateway v{}", crate::VERSION);

    let provider = VertexAIProvider::from_env(
        config
            .vertex
            .provider_config(config.rerank.timeout_seconds),
    )
    .await
    .map_err(|e| GatewayError::config(format!("Vertex AI setup failed: {}", e)))?;
    let provider: Arc<dyn CompletionProvider> = Arc::new(provider);

    if config.vertex.startup_probe {
        startup_probe(provider.as_ref(), &config.vertex.model).await?;
    }

    let server = HttpServer::new(&config, provider);
    info!("Server starting at: http://{}", config.server.address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    for path in RERANK_PATHS {
        info!("   POST {} - Rerank documents", path);
    }

    server.start().await
}

/// Send one prompt to confirm credentials and model access before serving
pub async fn startup_probe(provider: &dyn CompletionProvider, model: &str) -> Result<String> {
    info!("Probing {} with model {}", provider.provider_name(), model);

    let reply = provider
        .complete(model, STARTUP_PROBE_PROMPT)
        .await
        .map_err(|e| GatewayError::server(format!("Startup probe failed: {}", e)))?;

    info!("Startup probe response: {}", reply.trim());
    Ok(reply)
}
