use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ClausalError, ClausalResult};

/// Retrieval engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum chunks returned per query. Fewer are returned when fewer
    /// clear the producing tier's minimum score — results are never
    /// padded with low-relevance chunks.
    pub top_k: usize,
    /// Minimum cosine similarity for the embedding tier.
    pub embedding_min_score: f64,
    /// Minimum cosine similarity for the lexical tier.
    pub lexical_min_score: f64,
    /// Capacity of the per-document vector index cache.
    pub index_cache_capacity: u64,
}

impl RetrievalConfig {
    pub fn validate(&self) -> ClausalResult<()> {
        if self.top_k == 0 {
            return Err(ClausalError::Config {
                reason: "retrieval.top_k must be positive".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.embedding_min_score)
            || !(0.0..=1.0).contains(&self.lexical_min_score)
        {
            return Err(ClausalError::Config {
                reason: "retrieval minimum scores must be within [0, 1]".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            embedding_min_score: defaults::DEFAULT_EMBEDDING_MIN_SCORE,
            lexical_min_score: defaults::DEFAULT_LEXICAL_MIN_SCORE,
            index_cache_capacity: defaults::DEFAULT_INDEX_CACHE_CAPACITY,
        }
    }
}
