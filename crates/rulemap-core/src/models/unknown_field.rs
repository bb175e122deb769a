use std::fmt;

use serde::{Deserialize, Serialize};

use super::KeySuggestion;

/// An identifier a downstream rule referenced that the catalog does not contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownField {
    pub identifier: String,
    pub suggestions: Vec<KeySuggestion>,
}

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' → Did you mean: ", self.identifier)?;
        for (i, s) in self.suggestions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({:.2})", s.identifier, s.similarity)?;
        }
        Ok(())
    }
}
