//! TF-IDF sparse-to-dense fallback provider.
//!
//! Generates fixed-dimension vectors from term frequency–inverse document frequency
//! scores. No external dependencies, works in air-gapped environments and tests.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rulemap_core::errors::RulemapResult;
use rulemap_core::traits::IEmbeddingProvider;

use crate::similarity;

/// Pseudo-term for texts without any indexable term, so their vector still has
/// a direction.
const EMPTY_TEXT_TERM: &str = "\u{0}empty";

/// TF-IDF fallback embedding provider.
///
/// Produces deterministic dense vectors by hashing terms into fixed-dimension
/// buckets and weighting by term frequency. Not as semantically rich as neural
/// embeddings, but always available.
pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Build a unit-norm TF vector for the given text.
    fn tfidf_vector(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            vec[Self::hash_term(EMPTY_TEXT_TERM, self.dimensions)] = 1.0;
            return vec;
        }

        // Count term frequencies. Ordered, so colliding buckets sum reproducibly.
        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in &tf {
            let freq = count / total;
            // IDF approximation: penalize very short terms (likely stopwords).
            let idf = 1.0 + (term.len() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * idf;
        }

        similarity::l2_normalize(&mut vec);
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> RulemapResult<Vec<f32>> {
        Ok(self.tfidf_vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> RulemapResult<Vec<Vec<f32>>> {
        Ok(texts.par_iter().map(|t| self.tfidf_vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-fallback"
    }

    fn is_available(&self) -> bool {
        true
    }
}
