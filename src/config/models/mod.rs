//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod gateway;
pub mod generation;
pub mod rate_limit;
pub mod server;
pub mod upstream;

// Re-export all configuration types
pub use gateway::*;
pub use generation::*;
pub use rate_limit::*;
pub use server::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default upstream timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_model() -> String {
    "gpt-4.1".to_string()
}

pub fn default_max_completion_tokens() -> u32 {
    200
}

pub fn default_temperature() -> f32 {
    0.8
}

pub fn default_requests_per_minute() -> u32 {
    60
}

pub fn default_window_secs() -> u64 {
    60
}

pub fn default_static_dir() -> Option<String> {
    Some("static".to_string())
}

pub fn default_true() -> bool {
    true
}
