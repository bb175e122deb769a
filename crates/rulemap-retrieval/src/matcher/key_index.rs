use rulemap_catalog::KeyCatalog;
use rulemap_core::errors::{MatchingError, RulemapResult};
use rulemap_core::models::KeyDescriptor;
use rulemap_core::traits::IEmbeddingProvider;
use rulemap_embeddings::similarity;

use crate::ranking;

/// Catalog descriptors and their embeddings. Row `i` of the matrix embeds
/// `texts[i]`, which describes `keys[i]`.
#[derive(Debug, Clone)]
pub struct KeyIndex {
    keys: Vec<KeyDescriptor>,
    texts: Vec<String>,
    matrix: Vec<Vec<f32>>,
}

impl KeyIndex {
    /// Compose one text per key and embed the whole catalog in a single batch.
    pub fn build(catalog: &KeyCatalog, encoder: &dyn IEmbeddingProvider) -> RulemapResult<Self> {
        if catalog.is_empty() {
            return Err(MatchingError::EmptyCatalog.into());
        }

        let keys: Vec<KeyDescriptor> = catalog.iter().cloned().collect();
        let texts: Vec<String> = keys.iter().map(Self::compose_text).collect();
        let matrix = ranking::unit_rows(encoder.embed_batch(&texts)?, texts.len())?;

        Ok(Self {
            keys,
            texts,
            matrix,
        })
    }

    /// Label, identifier with dots as spaces, group, then every synonym.
    pub fn compose_text(key: &KeyDescriptor) -> String {
        let identifier = key.identifier.replace('.', " ");
        let mut parts = vec![key.label.as_str(), identifier.as_str(), key.group.as_str()];
        parts.extend(key.synonyms.iter().map(String::as_str));
        parts.join(" ")
    }

    /// Similarity of `query` against every key, in catalog order.
    pub fn scores(&self, query: &[f32]) -> Vec<f32> {
        similarity::score_rows(&self.matrix, query)
    }

    pub fn key(&self, index: usize) -> Option<&KeyDescriptor> {
        self.keys.get(index)
    }

    pub fn keys(&self) -> &[KeyDescriptor] {
        &self.keys
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn row_count(&self) -> usize {
        self.matrix.len()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulemap_catalog::SynonymTable;
    use rulemap_core::config::EmbeddingConfig;
    use rulemap_embeddings::EmbeddingEngine;

    #[test]
    fn composed_text_layout() {
        let key = KeyDescriptor::new("bureau.dpd", "DPD", "bureau")
            .with_synonyms(["days past due", "overdue days"]);
        assert_eq!(
            KeyIndex::compose_text(&key),
            "DPD bureau dpd bureau days past due overdue days"
        );
    }

    #[test]
    fn composed_text_without_synonyms() {
        let key = KeyDescriptor::new("foir", "FOIR", "metrics");
        assert_eq!(KeyIndex::compose_text(&key), "FOIR foir metrics");
    }

    #[test]
    fn rows_align_with_keys() {
        let engine = EmbeddingEngine::new(EmbeddingConfig {
            provider: "tfidf".to_string(),
            dimensions: 64,
            ..Default::default()
        });
        let index = KeyIndex::build(&KeyCatalog::builtin(), &engine).unwrap();
        assert_eq!(index.len(), index.row_count());
        assert_eq!(index.texts().len(), index.len());
        assert!(index.matrix.iter().all(|r| similarity::is_unit_norm(r)));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let engine = EmbeddingEngine::new(EmbeddingConfig {
            provider: "tfidf".to_string(),
            dimensions: 64,
            ..Default::default()
        });
        let catalog = KeyCatalog::new(Vec::new(), &SynonymTable::new()).unwrap();
        assert!(KeyIndex::build(&catalog, &engine).is_err());
    }
}
