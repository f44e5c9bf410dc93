//! # Party Prompt Gateway
//!
//! A small HTTP gateway that asks an OpenAI-compatible chat completion service
//! for "truth or dare" party prompts.
//!
//! ## Features
//!
//! - **Three modes**: `truth`, `dare`, or `mixed` (the gateway picks one at random)
//! - **Optional scene**: "office party", "camping trip" and so on steer the prompt
//! - **Rate limiting**: a process-wide sliding window shared by all workers
//! - **Strict failure reporting**: upstream timeouts, network errors, HTTP errors and
//!   malformed responses each surface with their own message and are never retried
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use party_prompt_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library Mode
//!
//! ```rust,no_run
//! use party_prompt_gateway::{Config, GenerationRequest, RequestOrchestrator};
//! use party_prompt_gateway::core::upstream::ReqwestTransport;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let transport = ReqwestTransport::new(Duration::from_secs(config.upstream().timeout))?;
//!     let orchestrator = RequestOrchestrator::from_config(&config, Arc::new(transport));
//!
//!     let result = orchestrator
//!         .generate(GenerationRequest::new("truth", Some("office party".to_string())))
//!         .await?;
//!     println!("{} ({})", result.content, result.mode);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::{
    GenerationMode, GenerationRequest, GenerationResult, KeywordClassifier, ModeClassifier,
    PromptBuilder, RateLimiter, RequestOrchestrator, ResolvedMode,
};
pub use core::upstream::{ChatTransport, FailureKind, UpstreamClient, UpstreamFailure};

use tracing::{debug, info};

/// The gateway process: configuration plus the HTTP server built from it
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::ServerBuilder::new()
            .with_config(config.clone())
            .build()?;

        Ok(Self { config, server })
    }

    /// Get the configuration the gateway was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        let build = build_info();
        info!(
            version = build.version,
            git_hash = build.git_hash,
            "Starting {}",
            NAME
        );
        // UpstreamConfig's Debug impl redacts the API key
        debug!("Configuration: {:#?}", self.config);

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the Unix epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
