//! Policy retriever behavior over the built-in corpus and ad hoc documents.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use rulemap_catalog::builtin::builtin_corpus;
use rulemap_core::config::{EmbeddingConfig, RetrievalConfig};
use rulemap_core::errors::{EmbeddingError, RulemapError, RulemapResult};
use rulemap_core::traits::IEmbeddingProvider;
use rulemap_embeddings::EmbeddingEngine;
use rulemap_retrieval::policy::context::CONTEXT_HEADER;
use rulemap_retrieval::PolicyRetriever;

fn retriever() -> PolicyRetriever {
    let engine = EmbeddingEngine::new(EmbeddingConfig {
        provider: "tfidf".to_string(),
        dimensions: 384,
        ..Default::default()
    });
    PolicyRetriever::new(Arc::new(engine), RetrievalConfig::default())
}

fn initialized() -> PolicyRetriever {
    let retriever = retriever();
    retriever.initialize(&builtin_corpus()).unwrap();
    retriever
}

#[test]
fn builtin_corpus_drops_short_paragraphs() {
    let retriever = initialized();
    let chunks = retriever.chunks();
    assert_eq!(chunks.len(), 26);
    assert_eq!(retriever.row_count(), 26);
    assert!(chunks.iter().all(|c| c.text().chars().count() > 50));
    assert!(chunks.iter().all(|c| !c.text().starts_with("## ")));
}

#[test]
fn bureau_query_retrieves_credit_score_policy() {
    let results = initialized()
        .retrieve_relevant_policies("bureau score minimum for approval", 3, 0.2)
        .unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[0].starts_with("Bureau score (credit score) is a critical factor"));
}

#[test]
fn unrelated_query_retrieves_nothing() {
    let retriever = initialized();
    assert!(retriever
        .retrieve_relevant_policies("pizza delivery", 3, 0.2)
        .unwrap()
        .is_empty());
    assert_eq!(retriever.get_policy_context("pizza delivery", 1000).unwrap(), "");
}

#[test]
fn add_document_appends_only_long_paragraphs() {
    let retriever = initialized();
    let before = retriever.chunk_count();
    let prior_rows: Vec<Vec<f32>> = (0..before).map(|i| retriever.row(i).unwrap()).collect();
    let prior_chunks = retriever.chunks();

    let document = format!("{}\n\n{}", "x".repeat(10), "Bounce ".repeat(30));
    assert_eq!(retriever.add_document(&document).unwrap(), 1);
    assert_eq!(retriever.chunk_count(), before + 1);
    assert_eq!(retriever.row_count(), before + 1);

    for (i, row) in prior_rows.iter().enumerate() {
        let after = retriever.row(i).unwrap();
        assert!(
            row.iter().zip(&after).all(|(a, b)| a.to_bits() == b.to_bits()),
            "row {i} changed after append"
        );
    }
    assert_eq!(&retriever.chunks()[..before], &prior_chunks[..]);
    assert_eq!(
        retriever.chunks().last().unwrap().text(),
        "Bounce ".repeat(30).trim()
    );
}

#[test]
fn add_document_without_qualifying_paragraphs_changes_nothing() {
    let retriever = initialized();
    let before = retriever.chunk_count();
    assert_eq!(retriever.add_document("short policy").unwrap(), 0);
    assert_eq!(retriever.add_document("").unwrap(), 0);
    assert_eq!(retriever.chunk_count(), before);
}

#[test]
fn appended_chunk_becomes_retrievable() {
    let retriever = initialized();
    retriever
        .add_document("Loans for tractor purchases require a tractor dealer invoice and a tractor registration certificate.")
        .unwrap();
    let results = retriever
        .retrieve_relevant_policies("tractor dealer invoice", 1, 0.2)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].starts_with("Loans for tractor purchases"));
}

#[test]
fn extra_documents_are_ranked_but_not_stored() {
    let retriever = initialized();
    let before = retriever.chunk_count();
    let extra = vec![
        "Solar panel financing requires a solar installer quotation and rooftop solar survey.".to_string(),
    ];

    let results = retriever
        .retrieve_with_documents("solar installer quotation", &extra, 3, 0.2)
        .unwrap();
    assert!(results[0].starts_with("Solar panel financing"));
    assert_eq!(retriever.chunk_count(), before);

    assert!(retriever
        .retrieve_relevant_policies("solar installer quotation", 3, 0.2)
        .unwrap()
        .iter()
        .all(|r| !r.starts_with("Solar panel financing")));
}

#[test]
fn extra_documents_rank_without_an_index() {
    let retriever = retriever();
    let extra = vec!["Solar panel financing requires a solar installer quotation and rooftop solar survey.".to_string()];
    let results = retriever
        .retrieve_with_documents("solar installer", &extra, 3, 0.0)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(!retriever.is_initialized());
}

#[test]
fn policy_context_is_numbered_and_budgeted() {
    let retriever = initialized();
    let context = retriever
        .get_policy_context("FOIR debt to income ratio", 1000)
        .unwrap();
    assert!(context.starts_with(CONTEXT_HEADER));
    assert!(context.contains("\n1. **Debt to Income:**"));
    assert!(context.contains("\n2. "));

    let body = &context[CONTEXT_HEADER.len()..];
    assert!(body.chars().count() <= 4000);

    let tight = retriever.get_policy_context("FOIR debt to income ratio", 1).unwrap();
    assert_eq!(tight, CONTEXT_HEADER);
}

#[test]
fn reinitialize_replaces_the_index() {
    let retriever = initialized();
    retriever
        .initialize(&["A single replacement policy paragraph long enough to survive chunking.".to_string()])
        .unwrap();
    assert_eq!(retriever.chunk_count(), 1);
    assert_eq!(retriever.chunks()[0].document(), 0);
}

#[test]
fn readers_and_appender_run_concurrently() {
    let retriever = Arc::new(initialized());
    let before = retriever.chunk_count();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let retriever = Arc::clone(&retriever);
            thread::spawn(move || {
                if i == 0 {
                    for n in 0..5 {
                        retriever
                            .add_document(&format!(
                                "Appended policy number {n} describing overdue amount escalation in detail."
                            ))
                            .unwrap();
                    }
                } else {
                    for _ in 0..20 {
                        let results = retriever
                            .retrieve_relevant_policies("overdue amount escalation", 3, 0.0)
                            .unwrap();
                        assert!(results.len() <= 3);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(retriever.chunk_count(), before + 5);
}

/// Answers the first `healthy_calls` calls, then fails every call.
struct FailsAfter {
    healthy_calls: usize,
    calls: AtomicUsize,
}

impl FailsAfter {
    fn check(&self) -> RulemapResult<()> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.healthy_calls {
            Ok(())
        } else {
            Err(EmbeddingError::InferenceFailed {
                reason: "model crashed".to_string(),
            }
            .into())
        }
    }
}

impl IEmbeddingProvider for FailsAfter {
    fn embed(&self, _text: &str) -> RulemapResult<Vec<f32>> {
        self.check()?;
        Ok(vec![1.0; 384])
    }
    fn embed_batch(&self, texts: &[String]) -> RulemapResult<Vec<Vec<f32>>> {
        self.check()?;
        Ok(texts.iter().map(|_| vec![1.0; 384]).collect())
    }
    fn dimensions(&self) -> usize {
        384
    }
    fn name(&self) -> &str {
        "fails-after"
    }
    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn model_failure_after_initialize_leaves_the_index_alone() {
    let engine = EmbeddingEngine::with_provider(
        EmbeddingConfig {
            dimensions: 384,
            ..Default::default()
        },
        Box::new(FailsAfter {
            healthy_calls: 1,
            calls: AtomicUsize::new(0),
        }),
    );
    let retriever = PolicyRetriever::new(Arc::new(engine), RetrievalConfig::default());
    retriever.initialize(&builtin_corpus()).unwrap();
    let before = retriever.chunk_count();

    let err = retriever
        .add_document("A new policy paragraph that is comfortably longer than fifty characters.")
        .unwrap_err();
    assert!(matches!(err, RulemapError::EmbeddingError(_)), "{err}");
    assert_eq!(retriever.chunk_count(), before);
    assert_eq!(retriever.row_count(), before);

    assert!(retriever
        .retrieve_relevant_policies("bureau score", 3, 0.0)
        .is_err());
}
