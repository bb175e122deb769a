/// Policy retrieval errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("index misaligned: {chunks} chunks but {rows} embedding rows")]
    IndexMisaligned { chunks: usize, rows: usize },

    #[error("policy index lock poisoned: {reason}")]
    LockPoisoned { reason: String },
}
