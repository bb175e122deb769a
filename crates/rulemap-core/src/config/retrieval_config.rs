use serde::{Deserialize, Serialize};

use super::defaults;

/// Policy retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum snippets returned per query.
    pub top_k: usize,
    /// Minimum cosine similarity for a snippet.
    pub threshold: f32,
    /// Snippets considered when building a policy context digest.
    pub context_top_k: usize,
    /// Approximate token budget of a policy context digest.
    pub context_max_tokens: usize,
    /// Rows examined per query = `overfetch_factor * top_k`.
    pub overfetch_factor: usize,
    /// Paragraphs at or below this trimmed length are discarded.
    pub min_chunk_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_RETRIEVAL_TOP_K,
            threshold: defaults::DEFAULT_RETRIEVAL_THRESHOLD,
            context_top_k: defaults::DEFAULT_CONTEXT_TOP_K,
            context_max_tokens: defaults::DEFAULT_CONTEXT_MAX_TOKENS,
            overfetch_factor: defaults::DEFAULT_OVERFETCH_FACTOR,
            min_chunk_chars: defaults::DEFAULT_MIN_CHUNK_CHARS,
        }
    }
}
