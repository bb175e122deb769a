//! Prompt-to-key matching over the catalog embedding matrix.

use std::collections::HashSet;
use std::sync::Arc;

use rulemap_catalog::KeyCatalog;
use rulemap_core::config::MatchingConfig;
use rulemap_core::errors::{MatchingError, RulemapResult};
use rulemap_core::models::{KeyDescriptor, KeySuggestion, MappingCandidate, SourcePhrase};
use rulemap_core::traits::{IEmbeddingProvider, IPhraseExtractor};
use rulemap_observability::matching_span;
use rulemap_observability::tracing_setup::events;
use tracing::debug;

use super::key_index::KeyIndex;
use crate::extraction::HeuristicPhraseExtractor;
use crate::ranking::{self, RankedFilter};

/// Matching is impossible until the catalog has been embedded.
enum IndexState {
    Uninitialized,
    Ready(KeyIndex),
}

/// Resolves free-form prompt phrases to catalog identifiers.
///
/// Querying before [`initialize`](Self::initialize) is a caller bug and fails
/// with [`MatchingError::IndexNotInitialized`].
pub struct KeyMatcher {
    encoder: Arc<dyn IEmbeddingProvider>,
    extractor: Box<dyn IPhraseExtractor>,
    filter: RankedFilter,
    state: IndexState,
}

impl KeyMatcher {
    pub fn new(encoder: Arc<dyn IEmbeddingProvider>, config: &MatchingConfig) -> Self {
        Self::with_extractor(
            encoder,
            Box::new(HeuristicPhraseExtractor::with_extra_vocabulary(
                &config.extra_vocabulary,
            )),
            RankedFilter::new(config.overfetch_factor),
        )
    }

    pub fn with_extractor(
        encoder: Arc<dyn IEmbeddingProvider>,
        extractor: Box<dyn IPhraseExtractor>,
        filter: RankedFilter,
    ) -> Self {
        Self {
            encoder,
            extractor,
            filter,
            state: IndexState::Uninitialized,
        }
    }

    /// Embed the catalog. Calling again rebuilds and fully replaces the index;
    /// on error the previous index stays in place.
    pub fn initialize(&mut self, catalog: &KeyCatalog) -> RulemapResult<()> {
        let index = KeyIndex::build(catalog, self.encoder.as_ref())?;
        events::index_built("keys", index.len(), self.encoder.name());
        self.state = IndexState::Ready(index);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, IndexState::Ready(_))
    }

    fn index(&self) -> RulemapResult<&KeyIndex> {
        match &self.state {
            IndexState::Ready(index) => Ok(index),
            IndexState::Uninitialized => Err(MatchingError::IndexNotInitialized.into()),
        }
    }

    /// Candidate phrases the matcher would try for `prompt`.
    pub fn extract_phrases(&self, prompt: &str) -> Vec<String> {
        self.extractor.extract(prompt)
    }

    /// Up to `top_k` mappings with similarity at or above `threshold`, best first,
    /// each identifier at most once.
    ///
    /// Extracted phrases are matched first, each to its single best key. The
    /// whole prompt then fills the remaining slots from the overfetch window.
    /// Equal similarities keep phrase matches ahead of prompt-context matches.
    pub fn find_relevant_keys(
        &self,
        prompt: &str,
        top_k: usize,
        threshold: f32,
    ) -> RulemapResult<Vec<MappingCandidate>> {
        let index = self.index()?;
        let span = matching_span!(prompt.len(), top_k);
        let _guard = span.enter();

        if top_k == 0 {
            return Ok(Vec::new());
        }

        let mut used: HashSet<String> = HashSet::new();
        let mut mappings = Vec::new();

        let phrases = self.extractor.extract(prompt);
        debug!(extractor = self.extractor.name(), ?phrases, "extracted phrases");

        if !phrases.is_empty() {
            let vectors = ranking::unit_rows(self.encoder.embed_batch(&phrases)?, phrases.len())?;
            for (phrase, vector) in phrases.into_iter().zip(vectors) {
                let scores = index.scores(&vector);
                let Some(best) = RankedFilter::top_n(&scores, 1).into_iter().next() else {
                    continue;
                };
                let Some(key) = index.key(best.index) else {
                    continue;
                };
                debug!(%phrase, key = %key.identifier, similarity = best.score, "best key for phrase");
                if best.score >= threshold && used.insert(key.identifier.clone()) {
                    mappings.push(candidate(SourcePhrase::Extracted(phrase), key, best.score));
                }
            }
        }

        let prompt_vector = ranking::unit_vector(self.encoder.embed(prompt)?)?;
        let scores = index.scores(&prompt_vector);
        let remaining = top_k.saturating_sub(mappings.len());
        let context_rows = self.filter.select_with(&scores, top_k, threshold, remaining, |row| {
            index
                .key(row.index)
                .is_some_and(|key| !used.contains(&key.identifier))
        });
        for row in context_rows {
            if let Some(key) = index.key(row.index) {
                mappings.push(candidate(SourcePhrase::PromptContext, key, row.score));
            }
        }

        // Stable: ties keep phrase matches first.
        mappings.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        mappings.truncate(top_k);

        debug!(mappings = mappings.len(), "key matching complete");
        Ok(mappings)
    }

    /// The `top_k` nearest keys to `phrase` by raw similarity, no threshold.
    pub fn suggest_for_unknown_field(
        &self,
        phrase: &str,
        top_k: usize,
    ) -> RulemapResult<Vec<KeySuggestion>> {
        let index = self.index()?;
        let vector = ranking::unit_vector(self.encoder.embed(phrase)?)?;
        let scores = index.scores(&vector);

        Ok(RankedFilter::top_n(&scores, top_k)
            .into_iter()
            .filter_map(|row| {
                index.key(row.index).map(|key| KeySuggestion {
                    identifier: key.identifier.clone(),
                    label: key.label.clone(),
                    similarity: row.score,
                })
            })
            .collect())
    }

    /// The composed text embedded for each key, in catalog order. Empty before
    /// initialization.
    pub fn key_texts(&self) -> &[String] {
        match &self.state {
            IndexState::Ready(index) => index.texts(),
            IndexState::Uninitialized => &[],
        }
    }

    /// Number of indexed keys.
    pub fn len(&self) -> usize {
        match &self.state {
            IndexState::Ready(index) => index.len(),
            IndexState::Uninitialized => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows in the key embedding matrix.
    pub fn row_count(&self) -> usize {
        match &self.state {
            IndexState::Ready(index) => index.row_count(),
            IndexState::Uninitialized => 0,
        }
    }
}

fn candidate(source: SourcePhrase, key: &KeyDescriptor, similarity: f32) -> MappingCandidate {
    MappingCandidate {
        source,
        identifier: key.identifier.clone(),
        similarity,
        label: key.label.clone(),
    }
}
