//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::core::upstream::ChatTransport;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    transport: Option<Arc<dyn ChatTransport>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom upstream transport instead of reqwest
    pub fn with_transport(mut self, transport: Arc<dyn ChatTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match self.transport {
            Some(transport) => Ok(HttpServer::with_state(
                config.server().clone(),
                AppState::from_config(config, transport),
            )),
            None => HttpServer::new(&config),
        }
    }
}

/// Load configuration from `config_path` (plus environment) and serve until shutdown
pub async fn run_server<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path).await?;
    serve(config).await
}

/// Serve with an already loaded configuration
pub async fn serve(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build()?;

    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health   - Health check");
    info!("   POST /generate - Generate a truth question or dare task");
    if let Some(dir) = &server.config().static_dir {
        info!("   GET  /         - Static front-end from {}", dir);
    }

    server.start().await
}
