//! Wire types and outcome types for the upstream chat completion call

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result of one upstream call: the trimmed message content or a classified failure
pub type UpstreamOutcome = std::result::Result<String, UpstreamFailure>;

/// Classification of an upstream failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The call did not finish within the configured timeout
    Timeout,
    /// The transport could not reach the service
    ConnectionError,
    /// The service answered with a non-2xx status
    HttpError(u16),
    /// 2xx answer that does not carry `choices[0].message.content`
    MalformedResponse,
    /// Base URL or API key missing; no request was sent
    ConfigError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::ConnectionError => write!(f, "connection error"),
            FailureKind::HttpError(status) => write!(f, "HTTP {}", status),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::ConfigError => write!(f, "configuration error"),
        }
    }
}

/// A classified upstream failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct UpstreamFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl UpstreamFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout() -> Self {
        Self::new(FailureKind::Timeout, "request timed out")
    }

    pub fn connection() -> Self {
        Self::new(FailureKind::ConnectionError, "network error")
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(FailureKind::HttpError(status), message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::MalformedResponse, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ConfigError, message)
    }
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Chat message sent upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Chat completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_completion_tokens: u32,
    pub temperature: f32,
}

/// The subset of the chat completion response the gateway reads
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

/// Error body returned by OpenAI-compatible services
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorPayload {
    pub message: String,
}
