//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::traits::CompletionProvider;
use crate::server::middleware::ErrorLogger;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server around a completion backend
    pub fn new(config: &Config, provider: Arc<dyn CompletionProvider>) -> Self {
        info!(
            "Creating HTTP server (provider: {}, model: {})",
            provider.provider_name(),
            config.vertex.model
        );

        Self {
            config: config.server.clone(),
            state: AppState::new(config.clone(), provider),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let max_body_size = state.config.server.max_body_size;

        App::new()
            .app_data(state)
            .app_data(web::PayloadConfig::new(max_body_size))
            .wrap(ErrorLogger)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "apeer-rerank")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    fn format_bind_error(e: std::io::Error, bind_addr: &str, port: u16) -> GatewayError {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            GatewayError::server(format!(
                "Failed to bind to {}: port {} is already in use (set PORT to choose another)",
                bind_addr, port
            ))
        } else {
            GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, e))
        }
    }
}
