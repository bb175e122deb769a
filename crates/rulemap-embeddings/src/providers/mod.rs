//! Provider registry.
//!
//! Priority order:
//! 1. fastembed (all-MiniLM-L6-v2, feature `fastembed`)
//! 2. ONNX (local model file)
//! 3. TF-IDF (always available, lowest quality)

#[cfg(feature = "fastembed")]
pub mod fastembed_provider;
pub mod onnx_provider;
pub mod tfidf_fallback;

#[cfg(feature = "fastembed")]
pub use fastembed_provider::FastEmbedProvider;
pub use onnx_provider::OnnxProvider;
pub use tfidf_fallback::TfIdfFallback;

use rulemap_core::config::EmbeddingConfig;
use rulemap_core::errors::{EmbeddingError, RulemapError, RulemapResult};
use rulemap_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Create the configured provider, boxed.
///
/// A provider that fails to load comes back as an [`UnloadedProvider`], which
/// reports itself unavailable so the engine's chain can skip it and record why.
/// An unknown name selects TF-IDF directly.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "fastembed" => create_fastembed(config),
        "onnx" => match config.model_path {
            Some(ref path) => match OnnxProvider::load(path, config.dimensions) {
                Ok(p) => {
                    info!(provider = "onnx", "embedding provider loaded");
                    Box::new(p)
                }
                Err(e) => {
                    warn!(error = %e, "ONNX provider failed to load");
                    Box::new(UnloadedProvider::new("onnx", config.dimensions))
                }
            },
            None => {
                warn!("ONNX provider configured but no model_path set");
                Box::new(UnloadedProvider::new("onnx", config.dimensions))
            }
        },
        "tfidf" => {
            info!(provider = "tfidf", "using TF-IDF embedding provider");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
        other => {
            warn!(provider = other, "unknown provider, using TF-IDF fallback");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
    }
}

#[cfg(feature = "fastembed")]
fn create_fastembed(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match FastEmbedProvider::load(config.dimensions, config.batch_size) {
        Ok(p) => {
            info!(provider = "fastembed", "embedding provider loaded");
            Box::new(p)
        }
        Err(e) => {
            warn!(error = %e, "fastembed provider failed to load");
            Box::new(UnloadedProvider::new("fastembed", config.dimensions))
        }
    }
}

#[cfg(not(feature = "fastembed"))]
fn create_fastembed(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    warn!("built without the `fastembed` feature");
    Box::new(UnloadedProvider::new("fastembed", config.dimensions))
}

/// Stand-in for a configured provider that could not be loaded.
pub struct UnloadedProvider {
    name: &'static str,
    dimensions: usize,
}

impl UnloadedProvider {
    pub fn new(name: &'static str, dimensions: usize) -> Self {
        Self { name, dimensions }
    }

    fn unavailable(&self) -> RulemapError {
        EmbeddingError::ProviderUnavailable {
            provider: self.name.to_string(),
        }
        .into()
    }
}

impl IEmbeddingProvider for UnloadedProvider {
    fn embed(&self, _text: &str) -> RulemapResult<Vec<f32>> {
        Err(self.unavailable())
    }

    fn embed_batch(&self, _texts: &[String]) -> RulemapResult<Vec<Vec<f32>>> {
        Err(self.unavailable())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn is_available(&self) -> bool {
        false
    }
}
