use serde::{Deserialize, Serialize};

/// Where the key catalog and policy corpus come from.
///
/// Unset paths select the built-in sample catalog and corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML file with `[[keys]]` entries and a `[synonyms]` table.
    pub catalog_path: Option<String>,
    /// Directory of `*.md` / `*.txt` policy documents.
    pub policy_dir: Option<String>,
}
