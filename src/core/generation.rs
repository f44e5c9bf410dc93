//! Generation request and result types

use crate::utils::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mode requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Truth,
    Dare,
    /// Let the gateway pick between truth and dare
    Mixed,
}

impl GenerationMode {
    /// The concrete mode, if this is not `Mixed`
    pub fn resolved(self) -> Option<ResolvedMode> {
        match self {
            GenerationMode::Truth => Some(ResolvedMode::Truth),
            GenerationMode::Dare => Some(ResolvedMode::Dare),
            GenerationMode::Mixed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::Truth => "truth",
            GenerationMode::Dare => "dare",
            GenerationMode::Mixed => "mixed",
        }
    }
}

impl FromStr for GenerationMode {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truth" => Ok(GenerationMode::Truth),
            "dare" => Ok(GenerationMode::Dare),
            "mixed" => Ok(GenerationMode::Mixed),
            _ => Err(GatewayError::validation(
                "Invalid mode, choose one of: truth, dare, mixed",
            )),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode reported back to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedMode {
    Truth,
    Dare,
}

impl ResolvedMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedMode::Truth => "truth",
            ResolvedMode::Dare => "dare",
        }
    }
}

impl From<ResolvedMode> for GenerationMode {
    fn from(mode: ResolvedMode) -> Self {
        match mode {
            ResolvedMode::Truth => GenerationMode::Truth,
            ResolvedMode::Dare => GenerationMode::Dare,
        }
    }
}

impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generation request as received from the client
///
/// The mode stays a raw string until the orchestrator validates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationRequest {
    pub mode: String,
    pub scene: Option<String>,
}

impl GenerationRequest {
    pub fn new(mode: impl Into<String>, scene: Option<String>) -> Self {
        Self {
            mode: mode.into(),
            scene,
        }
    }

    /// Scene with surrounding whitespace removed; empty when absent
    pub fn scene(&self) -> &str {
        self.scene.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// A successfully generated prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub content: String,
    pub mode: ResolvedMode,
    pub scene: String,
}
