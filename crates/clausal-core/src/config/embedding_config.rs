use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ClausalError, ClausalResult};

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Path to an ONNX embedding model. `None` means the embedding tier
    /// is unavailable and retrieval starts at the lexical tier.
    pub model_path: Option<String>,
    /// Embedding dimensionality.
    pub dimensions: usize,
    /// Capacity of the per-text embedding cache.
    pub cache_capacity: u64,
}

impl EmbeddingConfig {
    pub fn validate(&self) -> ClausalResult<()> {
        if self.dimensions == 0 {
            return Err(ClausalError::Config {
                reason: "embedding.dimensions must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            dimensions: defaults::DEFAULT_DIMENSIONS,
            cache_capacity: defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY,
        }
    }
}
