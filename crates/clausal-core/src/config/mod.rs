//! Pipeline configuration.
//!
//! Every knob has a serde default so partial TOML files work; `validate`
//! turns nonsensical values into `ClausalError::Config` before any
//! component is built.

mod chunker_config;
mod decision_config;
mod embedding_config;
mod retrieval_config;

pub use chunker_config::ChunkerConfig;
pub use decision_config::DecisionConfig;
pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ClausalError, ClausalResult};

pub(crate) mod defaults {
    pub const DEFAULT_WINDOW_SIZE: usize = 1000;
    pub const DEFAULT_OVERLAP: usize = 200;

    pub const DEFAULT_DIMENSIONS: usize = 384;
    pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 4096;

    pub const DEFAULT_TOP_K: usize = 3;
    pub const DEFAULT_EMBEDDING_MIN_SCORE: f64 = 0.10;
    pub const DEFAULT_LEXICAL_MIN_SCORE: f64 = 0.05;
    pub const DEFAULT_INDEX_CACHE_CAPACITY: u64 = 64;

    pub const DEFAULT_APPROVE_THRESHOLD: f64 = 3.0;
    pub const DEFAULT_REJECT_THRESHOLD: f64 = -3.0;
    pub const DEFAULT_HIGH_CONFIDENCE_MARGIN: f64 = 2.0;
}

/// Top-level configuration for the clausal pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClausalConfig {
    pub chunker: ChunkerConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub decision: DecisionConfig,
}

impl ClausalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> ClausalResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| ClausalError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a working pipeline.
    pub fn validate(&self) -> ClausalResult<()> {
        self.chunker.validate()?;
        self.embedding.validate()?;
        self.retrieval.validate()?;
        self.decision.validate()?;
        Ok(())
    }
}
