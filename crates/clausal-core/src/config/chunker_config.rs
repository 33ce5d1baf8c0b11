use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ClausalError, ClausalResult};

/// Chunker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Window size in characters.
    pub window_size: usize,
    /// Characters shared between adjacent windows. Must be smaller than
    /// `window_size`.
    pub overlap: usize,
}

impl ChunkerConfig {
    pub fn validate(&self) -> ClausalResult<()> {
        if self.window_size == 0 {
            return Err(ClausalError::Config {
                reason: "chunker.window_size must be positive".to_string(),
            });
        }
        if self.overlap >= self.window_size {
            return Err(ClausalError::Config {
                reason: format!(
                    "chunker.overlap ({}) must be smaller than window_size ({})",
                    self.overlap, self.window_size
                ),
            });
        }
        Ok(())
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            window_size: defaults::DEFAULT_WINDOW_SIZE,
            overlap: defaults::DEFAULT_OVERLAP,
        }
    }
}
