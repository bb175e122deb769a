//! Ranking shared by the key matcher and the policy retriever.

pub mod ranked_filter;

pub use ranked_filter::{RankedFilter, RankedRow};

use rulemap_core::errors::{EmbeddingError, RulemapResult};
use rulemap_embeddings::similarity;

/// Normalize a vector in place, rejecting one with no direction.
///
/// Stored rows and queries must both be unit length for a dot product to be
/// a cosine.
pub(crate) fn unit_vector(mut vector: Vec<f32>) -> RulemapResult<Vec<f32>> {
    if !similarity::is_unit_norm(&vector) && !similarity::l2_normalize(&mut vector) {
        return Err(EmbeddingError::InferenceFailed {
            reason: "encoder returned a zero vector".to_string(),
        }
        .into());
    }
    Ok(vector)
}

/// [`unit_vector`] for a batch, checking that every input got a row.
pub(crate) fn unit_rows(rows: Vec<Vec<f32>>, expected: usize) -> RulemapResult<Vec<Vec<f32>>> {
    if rows.len() != expected {
        return Err(EmbeddingError::BatchSizeMismatch {
            sent: expected,
            received: rows.len(),
        }
        .into());
    }
    rows.into_iter().map(unit_vector).collect()
}
