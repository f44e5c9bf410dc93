//! Party prompt gateway binary
//!
//! Loads configuration, applies command-line overrides and serves HTTP until shutdown.

#![allow(missing_docs)]

use clap::Parser;
use party_prompt_gateway::config::env_vars;
use party_prompt_gateway::utils::logging::{LogFormat, init_logging};
use party_prompt_gateway::{Config, Gateway};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about)]
struct Cli {
    /// Path to the YAML configuration file (defaults are used when it does not exist)
    #[arg(
        short,
        long,
        env = "GATEWAY_CONFIG",
        default_value = "config/gateway.yaml"
    )]
    config: PathBuf,

    /// Port to listen on, overriding the configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Log output format: text or json
    #[arg(long, env = "GATEWAY_LOG_FORMAT", default_value = "text")]
    log_format: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env is read before the subscriber exists so GATEWAY_DEBUG can raise the log level
    dotenvy::dotenv().ok();
    let debug = cli.debug
        || std::env::var(env_vars::DEBUG)
            .map(|v| v.trim().eq_ignore_ascii_case("true") || v.trim() == "1")
            .unwrap_or(false);
    init_logging(debug, LogFormat::from_name(&cli.log_format));

    let mut config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(port) = cli.port {
        config.gateway.server.port = port;
    }
    config.gateway.server.debug |= debug;

    let result = match Gateway::new(config) {
        Ok(gateway) => gateway.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, to keep the message readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
