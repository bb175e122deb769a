use proptest::prelude::*;
use rulemap_core::config::EmbeddingConfig;
use rulemap_embeddings::similarity::{cosine_similarity, is_unit_norm};
use rulemap_embeddings::EmbeddingEngine;

fn engine() -> EmbeddingEngine {
    EmbeddingEngine::new(EmbeddingConfig {
        provider: "tfidf".to_string(),
        dimensions: 128,
        l1_cache_size: 1_000,
        ..Default::default()
    })
}

proptest! {
    #[test]
    fn every_embedding_is_unit_norm(s in ".{0,200}") {
        let v = engine().encode(&s).unwrap();
        prop_assert_eq!(v.len(), 128);
        prop_assert!(is_unit_norm(&v));
    }

    #[test]
    fn similarity_is_symmetric(a in "[a-z ]{0,60}", b in "[a-z ]{0,60}") {
        let engine = engine();
        let va = engine.encode(&a).unwrap();
        let vb = engine.encode(&b).unwrap();
        let ab = cosine_similarity(&va, &vb);
        let ba = cosine_similarity(&vb, &va);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn similarity_is_bounded(a in "[a-z ]{0,60}", b in "[a-z ]{0,60}") {
        let engine = engine();
        let sim = cosine_similarity(&engine.encode(&a).unwrap(), &engine.encode(&b).unwrap());
        prop_assert!(sim <= 1.0 + 1e-4);
        prop_assert!(sim >= -1.0 - 1e-4);
    }

    #[test]
    fn batch_length_matches_input(texts in proptest::collection::vec("[a-z ]{0,30}", 0..20)) {
        let rows = engine().encode_batch(&texts).unwrap();
        prop_assert_eq!(rows.len(), texts.len());
        prop_assert!(rows.iter().all(|r| is_unit_norm(r)));
    }
}
