use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use proptest::prelude::*;
use rulemap_catalog::KeyCatalog;
use rulemap_core::config::{EmbeddingConfig, MatchingConfig};
use rulemap_embeddings::EmbeddingEngine;
use rulemap_retrieval::policy::chunk_document;
use rulemap_retrieval::{KeyMatcher, RankedFilter};

static MATCHER: LazyLock<KeyMatcher> = LazyLock::new(|| {
    let engine = Arc::new(EmbeddingEngine::new(EmbeddingConfig {
        provider: "tfidf".to_string(),
        dimensions: 384,
        ..Default::default()
    }));
    let mut matcher = KeyMatcher::new(engine, &MatchingConfig::default());
    matcher.initialize(&KeyCatalog::builtin()).unwrap();
    matcher
});

proptest! {
    #[test]
    fn selection_is_bounded_sorted_and_thresholded(
        scores in prop::collection::vec(-1.0f32..=1.0, 0..64),
        top_k in 0usize..10,
        threshold in -1.0f32..=1.0,
        factor in 1usize..4,
    ) {
        let filter = RankedFilter::new(factor);
        let rows = filter.select(&scores, top_k, threshold);

        prop_assert!(rows.len() <= top_k);
        let unique: HashSet<usize> = rows.iter().map(|r| r.index).collect();
        prop_assert_eq!(unique.len(), rows.len());
        for row in &rows {
            prop_assert!(row.score >= threshold);
            prop_assert_eq!(row.score, scores[row.index]);
        }
        for pair in rows.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn top_n_matches_a_full_sort(scores in prop::collection::vec(-1.0f32..=1.0, 0..64), n in 0usize..70) {
        let mut expected: Vec<usize> = (0..scores.len()).collect();
        expected.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
        expected.truncate(n);

        let actual: Vec<usize> = RankedFilter::top_n(&scores, n).iter().map(|r| r.index).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn mappings_respect_top_k_threshold_and_uniqueness(
        prompt in "[a-z ><=0-9]{0,80}",
        top_k in 1usize..8,
        threshold in 0.0f32..0.9,
    ) {
        let mappings = MATCHER.find_relevant_keys(&prompt, top_k, threshold).unwrap();

        prop_assert!(mappings.len() <= top_k);
        let unique: HashSet<&str> = mappings.iter().map(|m| m.identifier.as_str()).collect();
        prop_assert_eq!(unique.len(), mappings.len());
        for m in &mappings {
            prop_assert!(m.similarity >= threshold);
        }
        for pair in mappings.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn suggestions_have_exactly_min_of_k_and_catalog(phrase in "[a-z ]{0,40}", top_k in 0usize..50) {
        let suggestions = MATCHER.suggest_for_unknown_field(&phrase, top_k).unwrap();
        prop_assert_eq!(suggestions.len(), top_k.min(MATCHER.len()));
    }

    #[test]
    fn chunks_are_trimmed_and_long_enough(
        paragraphs in prop::collection::vec("[a-z .]{0,120}", 0..8),
        min_chars in 0usize..80,
    ) {
        let document = paragraphs.join("\n  \n");
        for chunk in chunk_document(&document, 0, min_chars) {
            prop_assert!(chunk.text().chars().count() > min_chars);
            prop_assert_eq!(chunk.text(), chunk.text().trim());
        }
    }
}
