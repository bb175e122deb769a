//! The built-in sample data model and policy corpus, used when no catalog
//! file or policy directory is configured.

mod policies;
mod store_keys;
mod synonyms;

pub use policies::{builtin_corpus, builtin_policy_documents, builtin_policy_snippets};
pub use store_keys::store_keys;
pub use synonyms::synonym_table;
