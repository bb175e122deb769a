//! Catalog and corpus loading from disk.
//!
//! Catalog file format:
//!
//! ```toml
//! [[keys]]
//! identifier = "bureau.score"
//! label = "Bureau Score"
//! group = "bureau"
//! synonyms = ["credit score"]   # optional
//!
//! [synonyms]
//! "bureau.score" = ["cibil", "credit rating"]
//! ```

use std::path::Path;

use rulemap_core::errors::CatalogError;
use rulemap_core::models::KeyDescriptor;
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::KeyCatalog;
use crate::synonyms::SynonymTable;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    keys: Vec<KeyDescriptor>,
    #[serde(default)]
    synonyms: SynonymTable,
}

/// Parse a catalog from TOML text. `origin` names the source in errors.
pub fn parse_catalog(content: &str, origin: &str) -> Result<KeyCatalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content).map_err(|e| CatalogError::ParseFailed {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;
    KeyCatalog::new(file.keys, &file.synonyms)
}

/// Load a catalog TOML file.
pub fn load_catalog(path: &Path) -> Result<KeyCatalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let catalog = parse_catalog(&content, &path.display().to_string())?;
    info!(path = %path.display(), keys = catalog.len(), "key catalog loaded");
    Ok(catalog)
}

/// Read every `*.md` and `*.txt` file in `dir`, in lexical file-name order.
pub fn load_policy_documents(dir: &Path) -> Result<Vec<String>, CatalogError> {
    let read_failed = |e: std::io::Error| CatalogError::ReadFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_failed)? {
        let path = entry.map_err(read_failed)?.path();
        let is_policy = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("txt"));
        if path.is_file() && is_policy {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), chars = text.len(), "policy document read");
        documents.push(text);
    }

    info!(dir = %dir.display(), documents = documents.len(), "policy documents loaded");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_synonyms() {
        let catalog = parse_catalog(
            r#"
            [[keys]]
            identifier = "bureau.score"
            label = "Bureau Score"
            group = "bureau"
            synonyms = ["credit score"]

            [[keys]]
            identifier = "foir"
            label = "FOIR"
            group = "metrics"

            [synonyms]
            "bureau.score" = ["cibil"]
            "unknown.key" = ["ignored"]
            "#,
            "<test>",
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("bureau.score").unwrap().synonyms, ["credit score", "cibil"]);
        assert!(catalog.get("foir").unwrap().synonyms.is_empty());
    }

    #[test]
    fn missing_field_is_parse_error() {
        let err = parse_catalog("[[keys]]\nidentifier = \"x\"\n", "<test>").unwrap_err();
        assert!(matches!(err, CatalogError::ParseFailed { .. }));
    }

    #[test]
    fn duplicate_keys_in_file_are_rejected() {
        let err = parse_catalog(
            r#"
            [[keys]]
            identifier = "a"
            label = "A"
            group = "g"
            [[keys]]
            identifier = "a"
            label = "A again"
            group = "g"
            "#,
            "<test>",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIdentifier { .. }));
    }
}
