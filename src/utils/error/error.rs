//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway.

#![allow(missing_docs)]

use crate::core::upstream::{FailureKind, UpstreamFailure};
use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported generation mode or otherwise invalid input
    #[error("{0}")]
    Validation(String),

    /// Request body could not be read
    #[error("{0}")]
    BadRequest(String),

    /// Rate limiting errors
    #[error("{message}")]
    RateLimit {
        message: String,
        retry_after_secs: Option<u64>,
    },

    /// Upstream generation service failures
    #[error("Upstream call failed: {0}")]
    Upstream(UpstreamFailure),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn rate_limit<S: Into<String>>(message: S, retry_after_secs: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after_secs,
        }
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Kind of the upstream failure, if this error came from the upstream call
    pub fn upstream_kind(&self) -> Option<FailureKind> {
        match self {
            GatewayError::Upstream(failure) => Some(failure.kind),
            _ => None,
        }
    }

    /// Message shown to the client
    fn client_message(&self) -> String {
        match self {
            GatewayError::Config(message) => {
                format!("Gateway is not configured correctly: {}", message)
            }
            GatewayError::Validation(_)
            | GatewayError::BadRequest(_)
            | GatewayError::RateLimit { .. }
            | GatewayError::Upstream(_) => self.to_string(),
            _ => "An internal error occurred".to_string(),
        }
    }
}

// The client only knows two error shapes: `{error}` for requests it can fix
// and `{success: false, error}` for everything that failed on our side.
impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) | GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);

        match self {
            GatewayError::Validation(_) | GatewayError::BadRequest(_) => {
                builder.json(ClientErrorBody {
                    error: self.client_message(),
                })
            }
            GatewayError::RateLimit {
                retry_after_secs, ..
            } => {
                if let Some(secs) = retry_after_secs {
                    builder.insert_header((RETRY_AFTER, secs.to_string()));
                }
                builder.json(ClientErrorBody {
                    error: self.client_message(),
                })
            }
            _ => builder.json(FailureBody {
                success: false,
                error: self.client_message(),
            }),
        }
    }
}

/// Error body for 4xx responses
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ClientErrorBody {
    pub error: String,
}

/// Error body for 5xx responses
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
}

impl From<UpstreamFailure> for GatewayError {
    fn from(failure: UpstreamFailure) -> Self {
        match failure.kind {
            FailureKind::ConfigError => GatewayError::Config(failure.message),
            _ => GatewayError::Upstream(failure),
        }
    }
}
