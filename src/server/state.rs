//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::RequestOrchestrator;
use crate::core::upstream::ChatTransport;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are `Arc`s so the rate limiter
/// window is shared process-wide.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Generation pipeline
    pub orchestrator: Arc<RequestOrchestrator>,
}

impl AppState {
    pub fn new(config: Config, orchestrator: RequestOrchestrator) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
        }
    }

    /// Wire the orchestrator from configuration over the given transport
    pub fn from_config(config: Config, transport: Arc<dyn ChatTransport>) -> Self {
        let orchestrator = RequestOrchestrator::from_config(&config, transport);
        Self::new(config, orchestrator)
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the upstream base URL and API key are both set
    pub fn api_configured(&self) -> bool {
        self.orchestrator.upstream().is_configured()
    }
}
