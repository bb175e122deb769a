//! Key matching: prompt phrases to catalog identifiers.

pub mod key_index;
pub mod key_matcher;

pub use key_index::KeyIndex;
pub use key_matcher::KeyMatcher;
