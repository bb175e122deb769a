//! Candidate phrase extraction from free-form prompts.

pub mod heuristic;
pub mod vocabulary;

pub use heuristic::HeuristicPhraseExtractor;
pub use vocabulary::DEFAULT_VOCABULARY;
