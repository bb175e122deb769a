//! Error handling for rulemap.
//! One error enum per subsystem, `thiserror` only, wrapped by [`RulemapError`].

pub mod catalog_error;
pub mod config_error;
pub mod embedding_error;
pub mod matching_error;
pub mod retrieval_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use matching_error::MatchingError;
pub use retrieval_error::RetrievalError;

/// Umbrella error for every rulemap operation.
#[derive(Debug, thiserror::Error)]
pub enum RulemapError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("matching error: {0}")]
    MatchingError(#[from] MatchingError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Crate-wide result alias.
pub type RulemapResult<T> = Result<T, RulemapError>;
