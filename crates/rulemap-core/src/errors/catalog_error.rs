/// Key catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate key identifier: {identifier}")]
    DuplicateIdentifier { identifier: String },

    #[error("key at position {position} has an empty identifier")]
    EmptyIdentifier { position: usize },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    ParseFailed { path: String, reason: String },
}
