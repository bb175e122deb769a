// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 64;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

// --- Key matching ---
pub const DEFAULT_MATCH_TOP_K: usize = 10;
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.3;
pub const DEFAULT_SUGGESTION_TOP_K: usize = 3;
pub const DEFAULT_OVERFETCH_FACTOR: usize = 2;

// --- Policy retrieval ---
pub const DEFAULT_RETRIEVAL_TOP_K: usize = 3;
pub const DEFAULT_RETRIEVAL_THRESHOLD: f32 = 0.2;
pub const DEFAULT_CONTEXT_TOP_K: usize = 5;
pub const DEFAULT_CONTEXT_MAX_TOKENS: usize = 1_000;
pub const DEFAULT_MIN_CHUNK_CHARS: usize = crate::constants::MIN_CHUNK_CHARS;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
