//! Mode classification for mixed-mode responses

use crate::core::generation::ResolvedMode;

/// Infers whether generated text reads as a truth question or a dare task
pub trait ModeClassifier: Send + Sync {
    fn classify(&self, text: &str) -> ResolvedMode;
}

/// Truth indicators in English and Chinese
pub const DEFAULT_TRUTH_INDICATORS: &[&str] = &[
    "ask", "tell", "share", "feel", "think", "问", "说", "告诉", "分享", "觉得",
];

/// Keyword heuristic: any truth indicator present means truth, otherwise dare
///
/// Matching is a case-sensitive substring search over the raw text.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    truth_indicators: Vec<String>,
}

impl KeywordClassifier {
    pub fn new<I, S>(truth_indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            truth_indicators: truth_indicators
                .into_iter()
                .map(Into::into)
                .filter(|keyword: &String| !keyword.is_empty())
                .collect(),
        }
    }

    pub fn truth_indicators(&self) -> &[String] {
        &self.truth_indicators
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_TRUTH_INDICATORS.iter().copied())
    }
}

impl ModeClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> ResolvedMode {
        if self
            .truth_indicators
            .iter()
            .any(|keyword| text.contains(keyword.as_str()))
        {
            ResolvedMode::Truth
        } else {
            ResolvedMode::Dare
        }
    }
}
