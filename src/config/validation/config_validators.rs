//! Configuration validators
//!
//! Validation implementations for every configuration section.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};
use url::Url;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;
        self.upstream.validate()?;
        self.rate_limit.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(0) = self.workers {
            return Err("Worker count must be greater than 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }

        if self.allows_all_origins() {
            warn!("CORS allows all origins. This may be insecure for production.");
        }

        Ok(())
    }
}

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<(), String> {
        // An empty base URL is allowed: the gateway starts and reports itself unconfigured
        let base_url = self.base_url.trim();
        if !base_url.is_empty() {
            let url = Url::parse(base_url)
                .map_err(|e| format!("Upstream base URL is invalid: {}", e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(format!(
                    "Upstream base URL must use http:// or https://, got: {}",
                    url.scheme()
                ));
            }
        }

        if self.model.trim().is_empty() {
            return Err("Upstream model cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("Upstream timeout must be greater than 0".to_string());
        }

        if self.max_completion_tokens == 0 {
            return Err("max_completion_tokens must be greater than 0".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0 and 2, got: {}",
                self.temperature
            ));
        }

        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.window_secs == 0 {
            return Err("Rate limit window must be greater than 0".to_string());
        }

        if self.enabled && self.requests_per_minute == 0 {
            warn!("Rate limit quota is 0; every generation request will be rejected");
        }

        Ok(())
    }
}
