use serde::{Deserialize, Serialize};

/// One canonical addressable field of the data model.
///
/// `identifier` is a dot-delimited path (`bureau.score`) and is unique within a
/// catalog. Catalog order defines the row index of the key embedding matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDescriptor {
    pub identifier: String,
    pub label: String,
    pub group: String,
    /// Alternative phrasings, in priority order.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl KeyDescriptor {
    pub fn new(
        identifier: impl Into<String>,
        label: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            group: group.into(),
            synonyms: Vec::new(),
        }
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }
}
