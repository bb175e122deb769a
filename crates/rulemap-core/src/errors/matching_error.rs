/// Key matcher errors.
#[derive(Debug, thiserror::Error)]
pub enum MatchingError {
    #[error("key index not initialized: call initialize() before matching")]
    IndexNotInitialized,

    #[error("cannot build a key index from an empty catalog")]
    EmptyCatalog,
}
