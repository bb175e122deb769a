//! # rulemap-retrieval
//!
//! Resolves natural-language phrases to catalog identifiers and retrieves the
//! policy paragraphs most relevant to a prompt, both by cosine similarity in a
//! single embedding space.
//!
//! ## Architecture
//!
//! ```text
//! SemanticCore
//! ├── KeyMatcher
//! │   ├── HeuristicPhraseExtractor (operator / with / vocabulary)
//! │   └── KeyIndex (catalog texts + aligned matrix)
//! ├── PolicyRetriever
//! │   ├── chunker (blank-line paragraphs)
//! │   ├── PolicyIndex (append-only chunks + aligned matrix)
//! │   └── context (numbered digest within a budget)
//! ├── RankedFilter (overfetch, threshold, truncate)
//! └── hints (unknown-field diagnostics, confidence)
//! ```

pub mod engine;
pub mod extraction;
pub mod hints;
pub mod matcher;
pub mod policy;
pub mod ranking;

pub use engine::{RuleHints, SemanticCore};
pub use extraction::HeuristicPhraseExtractor;
pub use matcher::{KeyIndex, KeyMatcher};
pub use policy::{PolicyIndex, PolicyRetriever};
pub use ranking::{RankedFilter, RankedRow};
