//! SemanticCore: one embedding space shared by the key matcher and the policy
//! retriever, wired from configuration.

use std::path::Path;
use std::sync::Arc;

use rulemap_catalog::builtin::builtin_corpus;
use rulemap_catalog::{load_catalog, load_policy_documents, KeyCatalog};
use rulemap_core::config::RulemapConfig;
use rulemap_core::errors::RulemapResult;
use rulemap_core::models::{MappingCandidate, UnknownField};
use rulemap_core::traits::IEmbeddingProvider;
use rulemap_embeddings::EmbeddingEngine;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hints;
use crate::matcher::KeyMatcher;
use crate::policy::PolicyRetriever;

/// Everything the rule-synthesis step gets for one prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleHints {
    pub mappings: Vec<MappingCandidate>,
    pub policies: Vec<String>,
}

/// The key matcher and the policy retriever over one shared encoder.
pub struct SemanticCore {
    config: RulemapConfig,
    engine: Arc<EmbeddingEngine>,
    catalog: KeyCatalog,
    corpus: Vec<String>,
    matcher: KeyMatcher,
    retriever: PolicyRetriever,
}

impl SemanticCore {
    /// Resolve the catalog and corpus named by `config` (built-in samples when
    /// unset) and build the encoder. Indices are not built until
    /// [`initialize`](Self::initialize).
    pub fn from_config(config: RulemapConfig) -> RulemapResult<Self> {
        let catalog = match &config.catalog.catalog_path {
            Some(path) => load_catalog(Path::new(path))?,
            None => KeyCatalog::builtin(),
        };
        let corpus = match &config.catalog.policy_dir {
            Some(dir) => load_policy_documents(Path::new(dir))?,
            None => builtin_corpus(),
        };
        let engine = Arc::new(EmbeddingEngine::new(config.embedding.clone()));
        Ok(Self::with_parts(config, engine, catalog, corpus))
    }

    /// Assemble from an existing encoder, catalog, and corpus.
    pub fn with_parts(
        config: RulemapConfig,
        engine: Arc<EmbeddingEngine>,
        catalog: KeyCatalog,
        corpus: Vec<String>,
    ) -> Self {
        let encoder: Arc<dyn IEmbeddingProvider> = engine.clone();
        let matcher = KeyMatcher::new(Arc::clone(&encoder), &config.matching);
        let retriever = PolicyRetriever::new(encoder, config.retrieval.clone());
        Self {
            config,
            engine,
            catalog,
            corpus,
            matcher,
            retriever,
        }
    }

    /// Embed the catalog and the corpus.
    pub fn initialize(&mut self) -> RulemapResult<()> {
        self.matcher.initialize(&self.catalog)?;
        self.retriever.initialize(&self.corpus)?;
        info!(
            keys = self.matcher.len(),
            chunks = self.retriever.chunk_count(),
            provider = self.engine.active_provider(),
            "semantic core initialized"
        );
        Ok(())
    }

    /// Mappings and policy snippets for `prompt` with the configured limits.
    /// `extra_documents` join the policy ranking for this call only.
    pub fn hints(&self, prompt: &str, extra_documents: &[String]) -> RulemapResult<RuleHints> {
        let mappings = self.matcher.find_relevant_keys(
            prompt,
            self.config.matching.top_k,
            self.config.matching.threshold,
        )?;
        let policies = self.retriever.retrieve_with_documents(
            prompt,
            extra_documents,
            self.config.retrieval.top_k,
            self.config.retrieval.threshold,
        )?;
        Ok(RuleHints { mappings, policies })
    }

    /// Suggestions for identifiers a generated rule used that the catalog lacks.
    pub fn field_diagnostics<S: AsRef<str>>(&self, used_identifiers: &[S]) -> RulemapResult<Vec<UnknownField>> {
        hints::diagnose_unknown_fields(
            &self.matcher,
            &self.catalog,
            used_identifiers,
            self.config.matching.suggestion_top_k,
        )
    }

    /// Overall confidence of a rule built from `mappings` using `used_identifiers`.
    pub fn confidence<S: AsRef<str>>(&self, mappings: &[MappingCandidate], used_identifiers: &[S]) -> f64 {
        hints::overall_confidence(mappings, used_identifiers)
    }

    /// Append a document to the shared policy index.
    pub fn add_document(&self, document: &str) -> RulemapResult<usize> {
        self.retriever.add_document(document)
    }

    pub fn matcher(&self) -> &KeyMatcher {
        &self.matcher
    }

    pub fn retriever(&self) -> &PolicyRetriever {
        &self.retriever
    }

    pub fn catalog(&self) -> &KeyCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &EmbeddingEngine {
        &self.engine
    }

    pub fn config(&self) -> &RulemapConfig {
        &self.config
    }
}
