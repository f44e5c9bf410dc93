//! Upstream generation service client
//!
//! This module provides the chat completion client, its transport seam and outcome types.

mod client;
mod transport;
mod types;

pub use client::UpstreamClient;
pub use transport::{
    ChatTransport, ReqwestTransport, TransportError, TransportRequest, TransportResponse,
};
pub use types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChoiceMessage,
    FailureKind, MessageRole, UpstreamFailure, UpstreamOutcome,
};

#[cfg(test)]
pub(crate) use transport::MockChatTransport;
