//! Configuration management for the Gateway
//!
//! This module handles loading, validation, and management of all gateway configuration.
//! Values come from a YAML file, then environment variables (a `.env` file is honoured)
//! override individual settings.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable names understood by [`Config::apply_env`]
pub mod env_vars {
    pub const API_KEY: &str = "UPSTREAM_API_KEY";
    pub const BASE_URL: &str = "UPSTREAM_BASE_URL";
    pub const MODEL_NAME: &str = "MODEL_NAME";
    pub const MAX_REQUESTS_PER_MINUTE: &str = "MAX_REQUESTS_PER_MINUTE";
    pub const HOST: &str = "GATEWAY_HOST";
    pub const PORT: &str = "GATEWAY_PORT";
    pub const DEBUG: &str = "GATEWAY_DEBUG";
}

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists (defaults otherwise), then apply `.env` and environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", env_file);
        }

        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            info!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;

        if !config.upstream().is_configured() {
            warn!(
                "Upstream is not configured: set {} and {} (or upstream.base_url / upstream.api_key)",
                env_vars::BASE_URL,
                env_vars::API_KEY
            );
        }

        Ok(config)
    }

    /// Override settings from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override settings from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gateway = &mut self.gateway;

        if let Some(api_key) = lookup(env_vars::API_KEY) {
            gateway.upstream.api_key = api_key;
        }
        if let Some(base_url) = lookup(env_vars::BASE_URL) {
            gateway.upstream.base_url = base_url;
        }
        if let Some(model) = lookup(env_vars::MODEL_NAME) {
            gateway.upstream.model = model;
        }
        if let Some(rpm) = lookup(env_vars::MAX_REQUESTS_PER_MINUTE) {
            gateway.rate_limit.requests_per_minute = parse_var(env_vars::MAX_REQUESTS_PER_MINUTE, &rpm)?;
        }
        if let Some(host) = lookup(env_vars::HOST) {
            gateway.server.host = host;
        }
        if let Some(port) = lookup(env_vars::PORT) {
            gateway.server.port = parse_var(env_vars::PORT, &port)?;
        }
        if let Some(debug) = lookup(env_vars::DEBUG) {
            gateway.server.debug = debug.trim().eq_ignore_ascii_case("true") || debug.trim() == "1";
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get upstream configuration
    pub fn upstream(&self) -> &UpstreamConfig {
        &self.gateway.upstream
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get generation settings
    pub fn generation(&self) -> &GenerationConfig {
        &self.gateway.generation
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .validate()
            .map_err(|e| GatewayError::Config(format!("Invalid configuration: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid value for {}: {}", name, e)))
}
