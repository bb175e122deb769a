//! The key catalog: the ordered registry of canonical fields.

use std::collections::HashMap;

use rulemap_core::errors::CatalogError;
use rulemap_core::models::KeyDescriptor;

use crate::builtin;
use crate::synonyms::SynonymTable;

/// Ordered, immutable set of key descriptors.
///
/// Catalog order is the row order of the key embedding matrix, so it never
/// changes after construction.
#[derive(Debug, Clone)]
pub struct KeyCatalog {
    keys: Vec<KeyDescriptor>,
    positions: HashMap<String, usize>,
}

impl KeyCatalog {
    /// Build a catalog, attaching each descriptor's phrases from `synonyms`
    /// after any it already carries.
    ///
    /// # Errors
    /// `EmptyIdentifier` for a blank identifier, `DuplicateIdentifier` when two
    /// descriptors share one.
    pub fn new(descriptors: Vec<KeyDescriptor>, synonyms: &SynonymTable) -> Result<Self, CatalogError> {
        let mut keys = Vec::with_capacity(descriptors.len());
        let mut positions = HashMap::with_capacity(descriptors.len());

        for (position, mut key) in descriptors.into_iter().enumerate() {
            if key.identifier.trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier { position });
            }
            if positions.contains_key(&key.identifier) {
                return Err(CatalogError::DuplicateIdentifier {
                    identifier: key.identifier,
                });
            }
            for phrase in synonyms.get(&key.identifier) {
                if !key.synonyms.contains(phrase) {
                    key.synonyms.push(phrase.clone());
                }
            }
            positions.insert(key.identifier.clone(), position);
            keys.push(key);
        }

        Ok(Self { keys, positions })
    }

    /// The sample lending data model with its synonym table.
    pub fn builtin() -> Self {
        let descriptors = builtin::store_keys();
        let synonyms = builtin::synonym_table();
        let mut positions = HashMap::with_capacity(descriptors.len());
        let keys = descriptors
            .into_iter()
            .enumerate()
            .map(|(position, key)| {
                positions.insert(key.identifier.clone(), position);
                let phrases = synonyms.get(&key.identifier).to_vec();
                key.with_synonyms(phrases)
            })
            .collect();
        Self { keys, positions }
    }

    pub fn get(&self, identifier: &str) -> Option<&KeyDescriptor> {
        self.positions.get(identifier).map(|&i| &self.keys[i])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.positions.contains_key(identifier)
    }

    /// Position of `identifier` in catalog order.
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.positions.get(identifier).copied()
    }

    pub fn by_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a KeyDescriptor> + 'a {
        self.keys.iter().filter(move |k| k.group == group)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.identifier.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyDescriptor> {
        self.keys.iter()
    }

    pub fn as_slice(&self) -> &[KeyDescriptor] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'a> IntoIterator for &'a KeyCatalog {
    type Item = &'a KeyDescriptor;
    type IntoIter = std::slice::Iter<'a, KeyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
