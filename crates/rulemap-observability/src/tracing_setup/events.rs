//! Structured log events for index lifecycle.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed index build.
pub fn index_built(index: &str, rows: usize, provider: &str) {
    tracing::info!(
        event = "index_built",
        index = %index,
        rows = rows,
        provider = %provider,
        "index built"
    );
}

/// Log an append to the policy index.
pub fn chunks_appended(added: usize, total: usize) {
    tracing::info!(
        event = "chunks_appended",
        added = added,
        total = total,
        "policy chunks appended"
    );
}

/// Log a query against an index that was never built.
pub fn index_not_ready(index: &str) {
    tracing::warn!(
        event = "index_not_ready",
        index = %index,
        "index queried before initialization, returning empty result"
    );
}
