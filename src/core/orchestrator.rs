//! Request orchestration
//!
//! Single entry point for generation: validate, admit, build, call, resolve the mode.

use crate::config::{Config, ModeResolutionPolicy};
use crate::core::classifier::{KeywordClassifier, ModeClassifier};
use crate::core::generation::{GenerationMode, GenerationRequest, GenerationResult};
use crate::core::prompt::PromptBuilder;
use crate::core::rate_limiter::RateLimiter;
use crate::core::upstream::{ChatTransport, UpstreamClient};
use crate::utils::error::{GatewayError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Coordinates the rate limiter, prompt builder, upstream client and classifier
pub struct RequestOrchestrator {
    limiter: Arc<RateLimiter>,
    builder: PromptBuilder,
    upstream: Arc<UpstreamClient>,
    classifier: Arc<dyn ModeClassifier>,
    policy: ModeResolutionPolicy,
    seed: Option<u64>,
}

impl RequestOrchestrator {
    /// Create an orchestrator with the default resolution policy and an entropy-seeded RNG
    pub fn new(
        limiter: Arc<RateLimiter>,
        builder: PromptBuilder,
        upstream: Arc<UpstreamClient>,
        classifier: Arc<dyn ModeClassifier>,
    ) -> Self {
        Self {
            limiter,
            builder,
            upstream,
            classifier,
            policy: ModeResolutionPolicy::default(),
            seed: None,
        }
    }

    /// Wire all components from configuration
    pub fn from_config(config: &Config, transport: Arc<dyn ChatTransport>) -> Self {
        let generation = config.generation();

        Self::new(
            Arc::new(RateLimiter::new(config.rate_limit())),
            PromptBuilder::new(generation.locale),
            Arc::new(UpstreamClient::new(config.upstream(), transport)),
            Arc::new(KeywordClassifier::default()),
        )
        .with_policy(generation.mode_resolution)
        .with_seed(generation.seed)
    }

    pub fn with_policy(mut self, policy: ModeResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Seed every mixed-mode draw with a fixed value (`None` draws from entropy per call)
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn upstream(&self) -> &UpstreamClient {
        &self.upstream
    }

    pub fn policy(&self) -> ModeResolutionPolicy {
        self.policy
    }

    /// Generate one truth or dare prompt
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let mode: GenerationMode = request.mode.parse().inspect_err(|_| {
            debug!(mode = %request.mode, "Rejected unsupported mode");
        })?;
        let scene = request.scene().to_string();

        let decision = self.limiter.admit();
        if !decision.allowed {
            warn!(
                limit = decision.limit,
                retry_after_secs = ?decision.retry_after_secs,
                "Generation request rate limited"
            );
            return Err(GatewayError::rate_limit(
                "Too many requests, please try again later",
                decision.retry_after_secs,
            ));
        }

        let prompt = self.builder.build(mode, &scene, &mut self.rng());
        debug!(
            mode = %mode,
            chosen_mode = %prompt.chosen_mode,
            prompt = %truncate(&prompt.text, 100),
            "Prompt built"
        );

        let content = self.upstream.call(&prompt.text).await?;

        let final_mode = match (mode, self.policy) {
            (GenerationMode::Mixed, ModeResolutionPolicy::TrustClassifier) => {
                let classified = self.classifier.classify(&content);
                if classified != prompt.chosen_mode {
                    debug!(
                        requested = %prompt.chosen_mode,
                        classified = %classified,
                        "Classifier disagrees with requested mode"
                    );
                }
                classified
            }
            _ => prompt.chosen_mode,
        };

        info!(mode = %mode, final_mode = %final_mode, "Generation succeeded");

        Ok(GenerationResult {
            content,
            mode: final_mode,
            scene,
        })
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
