pub mod embedding;
pub mod phrase_extractor;

pub use embedding::IEmbeddingProvider;
pub use phrase_extractor::IPhraseExtractor;
