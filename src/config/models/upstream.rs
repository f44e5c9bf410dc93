//! Upstream generation service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Upstream chat completion service
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Service base URL; `/v1/chat/completions` is appended
    #[serde(default)]
    pub base_url: String,
    /// Bearer credential
    #[serde(default)]
    pub api_key: String,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Response length cap
    #[serde(default = "default_max_completion_tokens")]
    pub max_completion_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            model: default_model(),
            timeout: default_timeout(),
            max_completion_tokens: default_max_completion_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl UpstreamConfig {
    /// Whether both the endpoint and the credential are set
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

// The API key never goes to logs
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() { "" } else { "***" },
            )
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("max_completion_tokens", &self.max_completion_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}
