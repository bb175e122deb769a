//! Policy retrieval: paragraph chunks of a policy corpus, ranked against a query.

pub mod chunker;
pub mod context;
pub mod index;
pub mod retriever;

pub use chunker::{chunk_document, split_paragraphs};
pub use context::format_policy_context;
pub use index::PolicyIndex;
pub use retriever::PolicyRetriever;
