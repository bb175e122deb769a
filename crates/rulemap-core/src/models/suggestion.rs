use serde::{Deserialize, Serialize};

/// A nearest catalog key offered for an unrecognized field reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySuggestion {
    #[serde(rename = "value")]
    pub identifier: String,
    pub label: String,
    pub similarity: f32,
}
