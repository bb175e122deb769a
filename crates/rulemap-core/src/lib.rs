//! # rulemap-core
//!
//! Foundation crate for the rulemap semantic key engine.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RulemapConfig;
pub use errors::{RulemapError, RulemapResult};
pub use models::{KeyDescriptor, KeySuggestion, MappingCandidate, PolicyChunk, SourcePhrase};
