//! Span definitions per operation: key matching, policy retrieval, embedding.

/// Create a key-matching span.
#[macro_export]
macro_rules! matching_span {
    ($prompt_chars:expr, $top_k:expr) => {
        tracing::info_span!("rulemap.matching", prompt_chars = $prompt_chars, top_k = $top_k)
    };
}

/// Create a policy-retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query_chars:expr, $top_k:expr) => {
        tracing::info_span!("rulemap.retrieval", query_chars = $query_chars, top_k = $top_k)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $rows:expr) => {
        tracing::info_span!("rulemap.embedding", provider = %$provider, rows = $rows)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MATCHING: &str = "rulemap.matching";
    pub const RETRIEVAL: &str = "rulemap.retrieval";
    pub const EMBEDDING: &str = "rulemap.embedding";
}
