use serde::{Deserialize, Serialize};

/// A paragraph of a policy document, kept for retrieval.
///
/// Only constructible through [`PolicyChunk::from_paragraph`], which enforces the
/// minimum trimmed length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyChunk {
    text: String,
    /// Position of the source document in the order documents were indexed.
    document: usize,
}

impl PolicyChunk {
    /// Trim `paragraph` and keep it only if it is longer than `min_chars` characters.
    pub fn from_paragraph(paragraph: &str, document: usize, min_chars: usize) -> Option<Self> {
        let trimmed = paragraph.trim();
        if trimmed.chars().count() > min_chars {
            Some(Self {
                text: trimmed.to_string(),
                document,
            })
        } else {
            None
        }
    }

    /// The same chunk attributed to another source document.
    pub fn with_document(mut self, document: usize) -> Self {
        self.document = document;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn document(&self) -> usize {
        self.document
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
