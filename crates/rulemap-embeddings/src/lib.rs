//! # rulemap-embeddings
//!
//! The embedding encoder shared by the key matcher and the policy retriever.
//! Every vector it returns is L2-normalized, so a dot product is a cosine similarity.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine (IEmbeddingProvider)
//! ├── DegradationChain (provider chosen once, at construction)
//! │   ├── FastEmbedProvider (all-MiniLM-L6-v2, feature "fastembed")
//! │   ├── OnnxProvider (local model + tokenizer.json)
//! │   └── TfIdfFallback (always available)
//! ├── EmbeddingCache (moka, single-text encodes)
//! └── similarity (normalize, cosine, dimension checks)
//! ```

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;
pub mod similarity;

pub use cache::EmbeddingCache;
pub use degradation::DegradationChain;
pub use engine::EmbeddingEngine;
pub use providers::{OnnxProvider, TfIdfFallback, UnloadedProvider};
#[cfg(feature = "fastembed")]
pub use providers::FastEmbedProvider;
