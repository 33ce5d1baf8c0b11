//! Capability traits at the seams of the pipeline.

mod embedding;
mod extractor;
mod llm;
mod tier;

pub use embedding::IEmbeddingProvider;
pub use extractor::ITextExtractor;
pub use llm::ILlmAnalyzer;
pub use tier::IRetrievalTier;
