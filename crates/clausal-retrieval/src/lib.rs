//! # clausal-retrieval
//!
//! Ranks a document's chunks against a parsed query through three
//! interchangeable strategies — embedding similarity, per-document
//! TF-IDF, and keyword overlap — attempted in priority order with
//! automatic fallback. The result always names the tier that actually
//! produced it.

pub mod engine;
pub mod expansion;
pub mod index;
pub mod tfidf;
pub mod tiers;

pub use engine::RetrievalEngine;
pub use tiers::{EmbeddingTier, KeywordTier, LexicalTier};
