use rulemap_core::errors::{RetrievalError, RulemapResult};
use rulemap_core::models::PolicyChunk;
use rulemap_embeddings::similarity;

/// Policy chunks and their embeddings, append-only.
///
/// Row `i` of the matrix embeds `chunks[i]`. Existing rows are never modified
/// or reordered.
#[derive(Debug, Clone, Default)]
pub struct PolicyIndex {
    chunks: Vec<PolicyChunk>,
    matrix: Vec<Vec<f32>>,
    documents: usize,
}

impl PolicyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one document's chunks and their rows.
    ///
    /// The chunks are attributed to the next document number. Nothing is
    /// appended when the counts differ.
    pub fn append_document(
        &mut self,
        chunks: Vec<PolicyChunk>,
        rows: Vec<Vec<f32>>,
    ) -> RulemapResult<()> {
        if chunks.len() != rows.len() {
            return Err(RetrievalError::IndexMisaligned {
                chunks: chunks.len(),
                rows: rows.len(),
            }
            .into());
        }
        let document = self.documents;
        self.chunks
            .extend(chunks.into_iter().map(|c| c.with_document(document)));
        self.matrix.extend(rows);
        self.documents += 1;
        Ok(())
    }

    /// Similarity of `query` against every chunk, in index order.
    pub fn scores(&self, query: &[f32]) -> Vec<f32> {
        similarity::score_rows(&self.matrix, query)
    }

    pub fn chunk(&self, index: usize) -> Option<&PolicyChunk> {
        self.chunks.get(index)
    }

    pub fn chunks(&self) -> &[PolicyChunk] {
        &self.chunks
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.matrix.get(index).map(Vec::as_slice)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn row_count(&self) -> usize {
        self.matrix.len()
    }

    /// Number of `append_document` calls, including ones with no chunks.
    pub fn document_count(&self) -> usize {
        self.documents
    }
}
