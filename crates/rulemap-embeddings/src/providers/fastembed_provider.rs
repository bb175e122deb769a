//! all-MiniLM-L6-v2 through `fastembed`, the production model.

use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use rulemap_core::errors::{EmbeddingError, RulemapResult};
use rulemap_core::traits::IEmbeddingProvider;
use tracing::debug;

use crate::similarity;

/// Output width of all-MiniLM-L6-v2.
pub const MINILM_DIMENSIONS: usize = 384;

/// Sentence-transformer provider backed by `fastembed::TextEmbedding`.
pub struct FastEmbedProvider {
    /// `TextEmbedding::embed` takes `&mut self`.
    model: Mutex<TextEmbedding>,
    batch_size: usize,
}

impl FastEmbedProvider {
    /// Load (downloading on first use) all-MiniLM-L6-v2.
    ///
    /// # Errors
    /// `ModelLoadFailed` if the model cannot be fetched or initialized, and
    /// `DimensionMismatch` if the configured width is not 384.
    pub fn load(dimensions: usize, batch_size: usize) -> RulemapResult<Self> {
        if dimensions != MINILM_DIMENSIONS {
            return Err(EmbeddingError::DimensionMismatch {
                expected: MINILM_DIMENSIONS,
                actual: dimensions,
            }
            .into());
        }

        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            path: "AllMiniLML6V2".to_string(),
            reason: e.to_string(),
        })?;

        debug!(model = "all-MiniLM-L6-v2", "fastembed model loaded");

        Ok(Self {
            model: Mutex::new(model),
            batch_size,
        })
    }

    fn run(&self, texts: Vec<&str>) -> RulemapResult<Vec<Vec<f32>>> {
        let mut model = self.model.lock().map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("model lock poisoned: {e}"),
        })?;
        let mut vectors = model
            .embed(texts, Some(self.batch_size))
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;
        for vector in &mut vectors {
            similarity::validate_dimensions(vector, MINILM_DIMENSIONS)?;
            similarity::l2_normalize(vector);
        }
        Ok(vectors)
    }
}

impl IEmbeddingProvider for FastEmbedProvider {
    fn embed(&self, text: &str) -> RulemapResult<Vec<f32>> {
        self.run(vec![text])?
            .pop()
            .ok_or_else(|| {
                EmbeddingError::BatchSizeMismatch {
                    sent: 1,
                    received: 0,
                }
                .into()
            })
    }

    fn embed_batch(&self, texts: &[String]) -> RulemapResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.run(texts.iter().map(String::as_str).collect())
    }

    fn dimensions(&self) -> usize {
        MINILM_DIMENSIONS
    }

    fn name(&self) -> &str {
        "all-MiniLM-L6-v2"
    }

    fn is_available(&self) -> bool {
        true
    }
}
