//! Vector math shared by every index: normalization, cosine similarity,
//! dimension checks.

use rulemap_core::constants::UNIT_NORM_TOLERANCE;
use rulemap_core::errors::{EmbeddingError, RulemapResult};

/// L2 norm of a vector.
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale `v` to unit length in place. Returns `false` (leaving `v` untouched)
/// when the vector has no direction.
pub fn l2_normalize(v: &mut [f32]) -> bool {
    let norm = l2_norm(v);
    if norm <= f32::EPSILON {
        return false;
    }
    for x in v.iter_mut() {
        *x /= norm;
    }
    true
}

/// Whether `v` has unit L2 norm within [`UNIT_NORM_TOLERANCE`].
pub fn is_unit_norm(v: &[f32]) -> bool {
    (l2_norm(v) - 1.0).abs() <= UNIT_NORM_TOLERANCE
}

/// Cosine similarity between two embeddings.
///
/// Assumes both vectors are already L2-normalized (returns dot product).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let min_len = a.len().min(b.len());
    a[..min_len]
        .iter()
        .zip(&b[..min_len])
        .map(|(x, y)| x * y)
        .sum()
}

/// Similarity of `query` against every row of `matrix`, in row order.
pub fn score_rows(matrix: &[Vec<f32>], query: &[f32]) -> Vec<f32> {
    matrix
        .iter()
        .map(|row| cosine_similarity(row, query))
        .collect()
}

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> RulemapResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}
