//! Test fixture loader for rulemap golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

// --- Typed golden datasets ---

/// `golden/key_matching/lending_prompts.json`
#[derive(Debug, Clone, Deserialize)]
pub struct KeyMatchingGolden {
    pub provider: String,
    pub cases: Vec<KeyMatchingCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyMatchingCase {
    pub id: String,
    pub prompt: String,
    pub top_k: usize,
    pub threshold: f32,
    pub expected_mappings: Vec<ExpectedMapping>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedMapping {
    pub source: String,
    pub identifier: String,
    pub similarity: f32,
}

/// `golden/key_matching/unknown_field_suggestions.json`
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionGolden {
    pub provider: String,
    pub cases: Vec<SuggestionCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionCase {
    pub id: String,
    pub phrase: String,
    pub top_k: usize,
    pub expected_leading: Vec<ExpectedSuggestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedSuggestion {
    pub identifier: String,
    pub similarity: f32,
}

/// `golden/policy_retrieval/builtin_corpus_queries.json`
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyRetrievalGolden {
    pub provider: String,
    pub expected_chunk_count: usize,
    pub expected_chunks_per_document: Vec<usize>,
    pub cases: Vec<PolicyRetrievalCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyRetrievalCase {
    pub id: String,
    pub query: String,
    pub top_k: usize,
    pub threshold: f32,
    pub expected_chunks: Vec<ExpectedChunk>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedChunk {
    pub index: usize,
    pub starts_with: String,
    pub similarity: f32,
}
