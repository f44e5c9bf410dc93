//! Prompt generation settings

use serde::{Deserialize, Serialize};

/// Language of the prompt sent upstream
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PromptLocale {
    #[default]
    En,
    Zh,
}

/// Which source decides the reported mode of a mixed request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModeResolutionPolicy {
    /// Re-derive the mode from the generated text
    #[default]
    TrustClassifier,
    /// Report the mode the prompt builder asked for
    TrustBuilder,
}

/// Prompt generation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Prompt language
    #[serde(default)]
    pub locale: PromptLocale,
    /// Mixed mode resolution policy
    #[serde(default)]
    pub mode_resolution: ModeResolutionPolicy,
    /// Fixed seed for mixed mode draws
    #[serde(default)]
    pub seed: Option<u64>,
}
