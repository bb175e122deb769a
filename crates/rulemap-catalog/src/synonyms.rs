use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Alternative phrasings keyed by catalog identifier.
///
/// Entries for identifiers the catalog does not contain are inert: they are
/// never validated and never attached to anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append phrases for `identifier`, skipping ones already present.
    pub fn insert<I, S>(&mut self, identifier: impl Into<String>, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entries.entry(identifier.into()).or_default();
        for phrase in phrases {
            let phrase = phrase.into();
            if !entry.contains(&phrase) {
                entry.push(phrase);
            }
        }
    }

    /// Phrases for `identifier`, empty when it has none.
    pub fn get(&self, identifier: &str) -> &[String] {
        self.entries
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V, S> FromIterator<(K, V)> for SynonymTable
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (identifier, phrases) in iter {
            table.insert(identifier, phrases);
        }
        table
    }
}
