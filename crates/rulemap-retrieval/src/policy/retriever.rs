//! The policy retriever: best-effort policy snippets for a query.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rulemap_core::config::RetrievalConfig;
use rulemap_core::constants::CHARS_PER_TOKEN;
use rulemap_core::errors::{RetrievalError, RulemapResult};
use rulemap_core::models::PolicyChunk;
use rulemap_core::traits::IEmbeddingProvider;
use rulemap_observability::retrieval_span;
use rulemap_observability::tracing_setup::events;
use tracing::{debug, warn};

use super::chunker::chunk_document;
use super::context::format_policy_context;
use super::index::PolicyIndex;
use crate::ranking::{self, RankedFilter};

enum IndexState {
    Uninitialized,
    Ready(PolicyIndex),
}

/// Ranks policy chunks against queries.
///
/// Queries before [`initialize`](Self::initialize) return nothing and log a
/// warning. [`add_document`](Self::add_document) is the only mutation after
/// initialization; it computes embeddings outside the lock and appends chunks
/// and rows under a single write guard, so readers never see them misaligned.
pub struct PolicyRetriever {
    encoder: Arc<dyn IEmbeddingProvider>,
    filter: RankedFilter,
    config: RetrievalConfig,
    state: RwLock<IndexState>,
}

impl PolicyRetriever {
    pub fn new(encoder: Arc<dyn IEmbeddingProvider>, config: RetrievalConfig) -> Self {
        Self {
            encoder,
            filter: RankedFilter::new(config.overfetch_factor),
            config,
            state: RwLock::new(IndexState::Uninitialized),
        }
    }

    fn read(&self) -> RulemapResult<RwLockReadGuard<'_, IndexState>> {
        self.state.read().map_err(|e| {
            RetrievalError::LockPoisoned {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> RulemapResult<RwLockWriteGuard<'_, IndexState>> {
        self.state.write().map_err(|e| {
            RetrievalError::LockPoisoned {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Chunk and embed the corpus, replacing any previous index.
    ///
    /// All chunks of all documents are embedded in one batch, in
    /// document-then-paragraph order.
    pub fn initialize(&self, documents: &[String]) -> RulemapResult<()> {
        let per_document: Vec<Vec<PolicyChunk>> = documents
            .iter()
            .enumerate()
            .map(|(i, doc)| chunk_document(doc, i, self.config.min_chunk_chars))
            .collect();
        let texts: Vec<String> = per_document
            .iter()
            .flatten()
            .map(|c| c.text().to_string())
            .collect();

        let mut rows = self.embed_rows(&texts)?.into_iter();
        let mut index = PolicyIndex::new();
        for chunks in per_document {
            let document_rows: Vec<Vec<f32>> = rows.by_ref().take(chunks.len()).collect();
            index.append_document(chunks, document_rows)?;
        }

        events::index_built("policies", index.chunk_count(), self.encoder.name());
        debug!(documents = documents.len(), "policy corpus indexed");

        *self.write()? = IndexState::Ready(index);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state
            .read()
            .map(|state| matches!(*state, IndexState::Ready(_)))
            .unwrap_or(false)
    }

    /// Up to `top_k` chunk texts scoring at least `threshold`, best first.
    ///
    /// Only the `overfetch_factor * top_k` best chunks are considered.
    pub fn retrieve_relevant_policies(
        &self,
        query: &str,
        top_k: usize,
        threshold: f32,
    ) -> RulemapResult<Vec<String>> {
        self.retrieve_with_documents(query, &[], top_k, threshold)
    }

    /// [`retrieve_relevant_policies`](Self::retrieve_relevant_policies) over the
    /// shared index plus `extra_documents`, which are chunked and embedded for
    /// this call only and never stored.
    pub fn retrieve_with_documents(
        &self,
        query: &str,
        extra_documents: &[String],
        top_k: usize,
        threshold: f32,
    ) -> RulemapResult<Vec<String>> {
        let span = retrieval_span!(query.len(), top_k);
        let _guard = span.enter();

        if !self.is_initialized() && extra_documents.is_empty() {
            events::index_not_ready("policies");
            return Ok(Vec::new());
        }

        let extra: Vec<String> = extra_documents
            .iter()
            .enumerate()
            .flat_map(|(i, doc)| chunk_document(doc, i, self.config.min_chunk_chars))
            .map(PolicyChunk::into_text)
            .collect();
        let extra_rows = self.embed_rows(&extra)?;
        let query_vector = ranking::unit_vector(self.encoder.embed(query)?)?;

        let state = self.read()?;
        let index = match &*state {
            IndexState::Ready(index) => Some(index),
            IndexState::Uninitialized => {
                warn!("policy index not initialized, ranking ad hoc documents only");
                None
            }
        };

        let mut scores = index.map(|i| i.scores(&query_vector)).unwrap_or_default();
        let shared = scores.len();
        scores.extend(extra_rows.iter().map(|row| {
            rulemap_embeddings::similarity::cosine_similarity(row, &query_vector)
        }));

        let selected = self.filter.select(&scores, top_k, threshold);
        let texts = selected
            .into_iter()
            .filter_map(|row| {
                debug!(row = row.index, similarity = row.score, "retrieved policy chunk");
                if row.index < shared {
                    index
                        .and_then(|i| i.chunk(row.index))
                        .map(|c| c.text().to_string())
                } else {
                    extra.get(row.index - shared).cloned()
                }
            })
            .collect();
        Ok(texts)
    }

    /// Numbered digest of the best chunks for `query`, within roughly
    /// `max_tokens` tokens. Empty when nothing is retrieved.
    pub fn get_policy_context(&self, query: &str, max_tokens: usize) -> RulemapResult<String> {
        let chunks = self.retrieve_relevant_policies(
            query,
            self.config.context_top_k,
            self.config.threshold,
        )?;
        Ok(format_policy_context(
            &chunks,
            max_tokens.saturating_mul(CHARS_PER_TOKEN),
        ))
    }

    /// Chunk `document` and append its qualifying chunks to the index.
    ///
    /// Returns the number of chunks added. A document with no qualifying
    /// paragraph changes nothing. Appending to a retriever that was never
    /// initialized starts a fresh index.
    pub fn add_document(&self, document: &str) -> RulemapResult<usize> {
        let chunks = chunk_document(document, 0, self.config.min_chunk_chars);
        if chunks.is_empty() {
            debug!("document has no qualifying paragraphs, nothing appended");
            return Ok(0);
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.text().to_string()).collect();
        let rows = self.embed_rows(&texts)?;
        let added = chunks.len();

        let mut state = self.write()?;
        if let IndexState::Uninitialized = *state {
            *state = IndexState::Ready(PolicyIndex::new());
        }
        if let IndexState::Ready(index) = &mut *state {
            index.append_document(chunks, rows)?;
            events::chunks_appended(added, index.chunk_count());
        }
        Ok(added)
    }

    fn embed_rows(&self, texts: &[String]) -> RulemapResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        ranking::unit_rows(self.encoder.embed_batch(texts)?, texts.len())
    }

    /// Snapshot of the indexed chunks, in index order.
    pub fn chunks(&self) -> Vec<PolicyChunk> {
        self.with_index(|index| index.chunks().to_vec())
            .unwrap_or_default()
    }

    pub fn chunk_count(&self) -> usize {
        self.with_index(PolicyIndex::chunk_count).unwrap_or(0)
    }

    pub fn row_count(&self) -> usize {
        self.with_index(PolicyIndex::row_count).unwrap_or(0)
    }

    /// Copy of embedding row `index`, if present.
    pub fn row(&self, index: usize) -> Option<Vec<f32>> {
        self.with_index(|i| i.row(index).map(<[f32]>::to_vec))
            .flatten()
    }

    fn with_index<T>(&self, f: impl FnOnce(&PolicyIndex) -> T) -> Option<T> {
        let state = self.state.read().ok()?;
        match &*state {
            IndexState::Ready(index) => Some(f(index)),
            IndexState::Uninitialized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulemap_core::config::EmbeddingConfig;
    use rulemap_embeddings::EmbeddingEngine;

    fn retriever() -> PolicyRetriever {
        let engine = EmbeddingEngine::new(EmbeddingConfig {
            provider: "tfidf".to_string(),
            dimensions: 256,
            ..Default::default()
        });
        PolicyRetriever::new(Arc::new(engine), RetrievalConfig::default())
    }

    fn long(topic: &str) -> String {
        format!("{topic} policy paragraph that is comfortably longer than fifty characters.")
    }

    #[test]
    fn uninitialized_retrieval_is_empty() {
        let retriever = retriever();
        assert!(!retriever.is_initialized());
        assert!(retriever
            .retrieve_relevant_policies("bureau score", 3, 0.0)
            .unwrap()
            .is_empty());
        assert_eq!(retriever.get_policy_context("bureau score", 1000).unwrap(), "");
        assert_eq!(retriever.chunk_count(), 0);
    }

    #[test]
    fn initialize_chunks_in_document_order() {
        let retriever = retriever();
        let docs = vec![
            format!("{}\n\nshort\n\n{}", long("alpha"), long("beta")),
            long("gamma"),
        ];
        retriever.initialize(&docs).unwrap();

        let chunks = retriever.chunks();
        assert_eq!(chunks.len(), 3);
        assert_eq!(retriever.row_count(), 3);
        assert!(chunks[0].text().starts_with("alpha"));
        assert!(chunks[1].text().starts_with("beta"));
        assert_eq!(chunks[2].document(), 1);
    }

    #[test]
    fn add_document_before_initialize_starts_fresh_index() {
        let retriever = retriever();
        assert_eq!(retriever.add_document(&long("delta")).unwrap(), 1);
        assert!(retriever.is_initialized());
        assert_eq!(retriever.chunk_count(), 1);
        assert_eq!(retriever.row_count(), 1);
    }

    #[test]
    fn zero_top_k_is_empty() {
        let retriever = retriever();
        retriever.initialize(&[long("alpha")]).unwrap();
        assert!(retriever
            .retrieve_relevant_policies("alpha", 0, -1.0)
            .unwrap()
            .is_empty());
    }
}
