//! Prompt builder

use super::templates;
use crate::config::PromptLocale;
use crate::core::generation::{GenerationMode, ResolvedMode};
use rand::Rng;

/// A rendered prompt and the concrete mode it asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub text: String,
    /// The mode actually requested from the model
    pub chosen_mode: ResolvedMode,
}

/// Builds the instruction sent to the upstream model
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    locale: PromptLocale,
}

impl PromptBuilder {
    pub fn new(locale: PromptLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> PromptLocale {
        self.locale
    }

    /// Build the prompt for `mode`
    ///
    /// `Mixed` draws truth or dare uniformly from `rng` first.
    pub fn build<R: Rng + ?Sized>(
        &self,
        mode: GenerationMode,
        scene: &str,
        rng: &mut R,
    ) -> BuiltPrompt {
        let chosen_mode = mode.resolved().unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                ResolvedMode::Truth
            } else {
                ResolvedMode::Dare
            }
        });

        BuiltPrompt {
            text: templates::render(self.locale, chosen_mode, scene.trim()),
            chosen_mode,
        }
    }
}
