use serde::{Deserialize, Serialize};

use super::defaults;

/// Key matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Maximum mappings returned per prompt.
    pub top_k: usize,
    /// Minimum cosine similarity for a mapping.
    pub threshold: f32,
    /// Suggestions returned per unknown field.
    pub suggestion_top_k: usize,
    /// Rows examined per query = `overfetch_factor * top_k`.
    pub overfetch_factor: usize,
    /// Extra literal terms scanned for in addition to the built-in vocabulary.
    pub extra_vocabulary: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_MATCH_TOP_K,
            threshold: defaults::DEFAULT_MATCH_THRESHOLD,
            suggestion_top_k: defaults::DEFAULT_SUGGESTION_TOP_K,
            overfetch_factor: defaults::DEFAULT_OVERFETCH_FACTOR,
            extra_vocabulary: Vec::new(),
        }
    }
}
