//! Document construction: normalize → chunk → stamp content id.

use clausal_core::config::ChunkerConfig;
use clausal_core::errors::ClausalResult;
use clausal_core::models::Document;
use tracing::debug;

use crate::chunker;
use crate::normalize;

/// Builds immutable [`Document`]s from extracted text.
#[derive(Debug)]
pub struct DocumentProcessor {
    config: ChunkerConfig,
}

impl DocumentProcessor {
    /// Create a processor, rejecting invalid chunking configuration.
    pub fn new(config: ChunkerConfig) -> ClausalResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Normalize text and build its chunk cover.
    ///
    /// Empty or whitespace-only input produces a zero-chunk document —
    /// a valid value, not an error.
    pub fn process(&self, text: &str) -> Document {
        let normalized = normalize::normalize(text);
        let chunks = chunker::chunk(&normalized, &self.config);
        debug!(
            chars = normalized.len(),
            chunks = chunks.len(),
            window = self.config.window_size,
            overlap = self.config.overlap,
            "document processed"
        );
        Document::new(normalized, chunks)
    }
}
