//! ONNX Runtime embedding provider.
//!
//! Loads a sentence-embedding model (e.g. all-MiniLM-L6-v2 exported to ONNX) via
//! the `ort` crate (v2) together with the `tokenizer.json` that sits next to it.
//! Output is mean-pooled over the attention mask and L2-normalized.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use rulemap_core::errors::{EmbeddingError, RulemapResult};
use rulemap_core::traits::IEmbeddingProvider;
use tokenizers::Tokenizer;
use tracing::debug;

use crate::similarity;

/// ONNX-based embedding provider using the `ort` crate.
pub struct OnnxProvider {
    /// `Session::run` requires `&mut self`, so the session sits behind a Mutex
    /// to satisfy the `&self` trait requirement.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    dimensions: usize,
    model_name: String,
}

impl OnnxProvider {
    /// Load an ONNX model and the `tokenizer.json` in the same directory.
    ///
    /// # Errors
    /// Returns `EmbeddingError::ModelLoadFailed` if either file cannot be loaded.
    pub fn load(model_path: &str, dimensions: usize) -> RulemapResult<Self> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(load_failed(model_path, "model file not found"));
        }

        let tokenizer_path = path.with_file_name("tokenizer.json");
        let tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(|e| {
            load_failed(
                &tokenizer_path.display().to_string(),
                &format!("tokenizer load failed: {e}"),
            )
        })?;

        let session = Session::builder()
            .map_err(|e| load_failed(model_path, &e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_failed(model_path, &e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(model_path, &e.to_string()))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, dims = dimensions, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            dimensions,
            model_name,
        })
    }

    /// Run inference on a single text, returning the unit-norm embedding.
    fn infer(&self, text: &str) -> RulemapResult<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| inference_failed(format!("tokenization failed: {e}")))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let type_ids: Vec<i64> = encoding.get_type_ids().iter().map(|&t| t as i64).collect();
        let seq_len = input_ids.len();
        let shape = vec![1i64, seq_len as i64];

        let ids_tensor = Tensor::from_array((shape.clone(), input_ids))
            .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;
        let mask_tensor = Tensor::from_array((shape.clone(), attention_mask.clone()))
            .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;
        let type_tensor = Tensor::from_array((shape, type_ids))
            .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| inference_failed(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor,
            ])
            .map_err(|e| inference_failed(e.to_string()))?;

        // Extract the first output tensor.
        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| inference_failed("no output tensor".to_string()))?;

        let (out_shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| inference_failed(format!("tensor extraction failed: {e}")))?;

        let mut embedding = if out_shape.len() == 3 {
            // [batch=1, seq, dims]: mean pool over attended tokens.
            let seq = out_shape[1] as usize;
            let dims = out_shape[2] as usize;
            let mut pooled = vec![0.0f32; dims];
            let mut attended = 0.0f32;
            for s in 0..seq {
                if attention_mask.get(s).copied().unwrap_or(0) == 0 {
                    continue;
                }
                attended += 1.0;
                for d in 0..dims {
                    pooled[d] += data[s * dims + d];
                }
            }
            if attended > 0.0 {
                for v in &mut pooled {
                    *v /= attended;
                }
            }
            pooled
        } else if out_shape.len() == 2 {
            // [batch=1, dims]: already pooled.
            let dims = out_shape[1] as usize;
            data[..dims].to_vec()
        } else {
            return Err(inference_failed(format!(
                "unexpected output shape: {out_shape:?}"
            )));
        };

        similarity::validate_dimensions(&embedding, self.dimensions)?;
        similarity::l2_normalize(&mut embedding);
        Ok(embedding)
    }
}

fn load_failed(path: &str, reason: &str) -> rulemap_core::RulemapError {
    EmbeddingError::ModelLoadFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn inference_failed(reason: String) -> rulemap_core::RulemapError {
    EmbeddingError::InferenceFailed { reason }.into()
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> RulemapResult<Vec<f32>> {
        self.infer(text)
    }

    fn embed_batch(&self, texts: &[String]) -> RulemapResult<Vec<Vec<f32>>> {
        // Sequential inference; the session is single-threaded behind its lock.
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
