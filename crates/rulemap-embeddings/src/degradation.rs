//! Provider selection for the embedding engine.
//!
//! Chain: configured provider → TF-IDF.
//! The chain is resolved once, when the engine is built. Every skipped
//! provider is recorded as a degradation event. After that the chosen provider
//! answers every call, so all vectors an engine returns share one space.

use chrono::Utc;
use rulemap_core::models::DegradationEvent;
use rulemap_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Ordered provider candidates ending in a last resort that is always used
/// when nothing earlier is available.
pub struct DegradationChain {
    candidates: Vec<Box<dyn IEmbeddingProvider>>,
    last_resort: Box<dyn IEmbeddingProvider>,
}

impl DegradationChain {
    pub fn new(last_resort: Box<dyn IEmbeddingProvider>) -> Self {
        Self {
            candidates: Vec::new(),
            last_resort,
        }
    }

    /// Add a candidate ahead of the last resort, after earlier candidates.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.candidates.push(provider);
    }

    /// Pick the first available candidate, or the last resort.
    ///
    /// Returns the provider and one event per candidate skipped on the way.
    pub fn resolve(self) -> (Box<dyn IEmbeddingProvider>, Vec<DegradationEvent>) {
        let mut skipped = Vec::new();
        let mut chosen = None;

        for provider in self.candidates {
            if provider.is_available() {
                chosen = Some(provider);
                break;
            }
            warn!(provider = provider.name(), "embedding provider unavailable, trying next in chain");
            skipped.push(provider.name().to_string());
        }

        let provider = chosen.unwrap_or(self.last_resort);
        let events = skipped
            .into_iter()
            .map(|name| DegradationEvent {
                component: "embeddings".to_string(),
                failure: format!("{name} unavailable"),
                fallback_used: provider.name().to_string(),
                timestamp: Utc::now(),
            })
            .collect();
        (provider, events)
    }
}
