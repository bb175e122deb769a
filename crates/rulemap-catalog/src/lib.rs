//! # rulemap-catalog
//!
//! The fixed data model the key matcher resolves phrases against, plus the
//! policy corpus the retriever indexes.
//!
//! - [`KeyCatalog`]: ordered, validated key descriptors with synonyms attached
//! - [`SynonymTable`]: identifier → alternative phrasings
//! - [`builtin`]: the sample lending data model and policy corpus
//! - [`loader`]: TOML catalogs and policy directories on disk

pub mod builtin;
pub mod catalog;
pub mod loader;
pub mod synonyms;

pub use catalog::KeyCatalog;
pub use loader::{load_catalog, load_policy_documents};
pub use synonyms::SynonymTable;
