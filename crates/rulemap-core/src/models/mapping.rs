use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::PROMPT_CONTEXT_SENTINEL;

/// Where a mapping candidate came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourcePhrase {
    /// A phrase extracted verbatim from the (lowercased) prompt.
    Extracted(String),
    /// Matched against the embedding of the whole prompt.
    PromptContext,
}

impl SourcePhrase {
    pub fn as_str(&self) -> &str {
        match self {
            SourcePhrase::Extracted(phrase) => phrase,
            SourcePhrase::PromptContext => PROMPT_CONTEXT_SENTINEL,
        }
    }

    pub fn is_prompt_context(&self) -> bool {
        matches!(self, SourcePhrase::PromptContext)
    }
}

impl From<String> for SourcePhrase {
    fn from(value: String) -> Self {
        if value == PROMPT_CONTEXT_SENTINEL {
            SourcePhrase::PromptContext
        } else {
            SourcePhrase::Extracted(value)
        }
    }
}

impl From<SourcePhrase> for String {
    fn from(value: SourcePhrase) -> Self {
        match value {
            SourcePhrase::Extracted(phrase) => phrase,
            SourcePhrase::PromptContext => PROMPT_CONTEXT_SENTINEL.to_string(),
        }
    }
}

impl fmt::Display for SourcePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prompt phrase resolved to a catalog key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingCandidate {
    #[serde(rename = "user_phrase")]
    pub source: SourcePhrase,
    #[serde(rename = "mapped_to")]
    pub identifier: String,
    /// Cosine similarity; in practice within [0, 1].
    pub similarity: f32,
    pub label: String,
}
