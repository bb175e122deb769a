/// rulemap version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A policy paragraph is kept only if its trimmed length is strictly greater than this.
pub const MIN_CHUNK_CHARS: usize = 50;

/// An extracted phrase is kept only if its trimmed length is strictly greater than this.
pub const MIN_PHRASE_CHARS: usize = 2;

/// Serialized form of the "derived from the whole prompt" source phrase.
pub const PROMPT_CONTEXT_SENTINEL: &str = "prompt_context";

/// Approximate characters per model token for context budgeting.
pub const CHARS_PER_TOKEN: usize = 4;

/// Weight used for an identifier that a rule references but no mapping produced.
pub const NEUTRAL_CONFIDENCE_WEIGHT: f64 = 0.5;

/// At most this many unknown identifiers get suggestion diagnostics.
pub const MAX_DIAGNOSED_FIELDS: usize = 3;

/// Tolerance used when checking that a vector has unit L2 norm.
pub const UNIT_NORM_TOLERANCE: f32 = 1e-3;
