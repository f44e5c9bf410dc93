//! Core functionality for the Gateway
//!
//! This module contains the request pipeline: rate limiting, prompt construction,
//! the upstream call, mode classification and the orchestrator tying them together.

pub mod classifier;
pub mod generation;
pub mod orchestrator;
pub mod prompt;
pub mod rate_limiter;
pub mod upstream;

pub use classifier::{KeywordClassifier, ModeClassifier};
pub use generation::{GenerationMode, GenerationRequest, GenerationResult, ResolvedMode};
pub use orchestrator::RequestOrchestrator;
pub use prompt::{BuiltPrompt, PromptBuilder};
pub use rate_limiter::{RateLimitDecision, RateLimiter};
pub use upstream::{FailureKind, UpstreamClient, UpstreamFailure, UpstreamOutcome};
