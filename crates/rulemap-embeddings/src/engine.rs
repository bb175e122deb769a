//! EmbeddingEngine: the main entry point for rulemap-embeddings.
//!
//! Picks one provider when it is built, caches single encodes, and guarantees
//! unit-norm output of the configured width. Implements `IEmbeddingProvider`,
//! so catalog keys, prompts, and policy text all go through the same instance
//! and land in one similarity space.

use std::sync::Mutex;

use rulemap_core::config::EmbeddingConfig;
use rulemap_core::errors::{EmbeddingError, RulemapResult};
use rulemap_core::models::DegradationEvent;
use rulemap_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::EmbeddingCache;
use crate::degradation::DegradationChain;
use crate::providers;
use crate::similarity;

/// The main embedding engine.
///
/// The provider is fixed for the engine's lifetime. A provider failure after
/// construction is returned to the caller, never answered by another model.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    events: Mutex<Vec<DegradationEvent>>,
    cache: EmbeddingCache,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Create a new engine from configuration.
    pub fn new(config: EmbeddingConfig) -> Self {
        let primary = providers::create_provider(&config);
        Self::with_provider(config, primary)
    }

    /// Create an engine around an explicit primary provider.
    ///
    /// If the primary reports itself unavailable, TF-IDF is used instead and a
    /// degradation event is recorded.
    pub fn with_provider(config: EmbeddingConfig, primary: Box<dyn IEmbeddingProvider>) -> Self {
        let mut chain = DegradationChain::new(Box::new(providers::TfIdfFallback::new(
            config.dimensions,
        )));
        chain.push(primary);
        let (provider, events) = chain.resolve();

        let cache = EmbeddingCache::new(config.l1_cache_size);

        info!(
            provider = provider.name(),
            dims = config.dimensions,
            degraded = !events.is_empty(),
            "EmbeddingEngine initialized"
        );

        Self {
            provider,
            events: Mutex::new(events),
            cache,
            config,
        }
    }

    /// Encode one text into a unit-norm vector. Results are cached by content hash.
    pub fn encode(&self, text: &str) -> RulemapResult<Vec<f32>> {
        let key = EmbeddingCache::key_for(text);
        if let Some(vector) = self.cache.get(&key) {
            debug!(hash = %key, "cache hit for embedding");
            return Ok(vector);
        }

        let raw = self.provider.embed(text)?;
        debug!(provider = self.provider.name(), chars = text.len(), "encoded text");
        let vector = self.finish(raw)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    /// Encode many texts in one provider call. Row `i` belongs to `texts[i]`.
    ///
    /// Batches bypass the cache.
    pub fn encode_batch(&self, texts: &[String]) -> RulemapResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let raw = self.provider.embed_batch(texts)?;
        if raw.len() != texts.len() {
            return Err(EmbeddingError::BatchSizeMismatch {
                sent: texts.len(),
                received: raw.len(),
            }
            .into());
        }
        debug!(provider = self.provider.name(), rows = raw.len(), "encoded batch");

        raw.into_iter().map(|v| self.finish(v)).collect()
    }

    /// Check the width and re-normalize.
    fn finish(&self, mut vector: Vec<f32>) -> RulemapResult<Vec<f32>> {
        similarity::validate_dimensions(&vector, self.config.dimensions)?;
        if !similarity::l2_normalize(&mut vector) {
            return Err(EmbeddingError::InferenceFailed {
                reason: "provider returned a zero vector".to_string(),
            }
            .into());
        }
        Ok(vector)
    }

    /// Drain the degradation events recorded while choosing the provider.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }

    /// Name of the provider answering every call.
    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    /// Get the configured dimensions.
    pub fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    /// Number of cached single-text encodes.
    pub fn cached_entries(&self) -> u64 {
        self.cache.len()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> RulemapResult<Vec<f32>> {
        self.encode(text)
    }

    fn embed_batch(&self, texts: &[String]) -> RulemapResult<Vec<Vec<f32>>> {
        self.encode_batch(texts)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        "rulemap-embedding-engine"
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
