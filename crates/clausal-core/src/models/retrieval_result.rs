use std::fmt;

use serde::{Deserialize, Serialize};

use super::document::Chunk;
use super::fallback_event::FallbackEvent;

/// Which retrieval tier actually produced a result.
///
/// Required for explainability and testing, not merely diagnostic: the
/// tag always names the tier whose scores are in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalMethod {
    Embedding,
    Lexical,
    Keyword,
}

impl RetrievalMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            RetrievalMethod::Embedding => "embedding",
            RetrievalMethod::Lexical => "lexical",
            RetrievalMethod::Keyword => "keyword",
        }
    }
}

impl fmt::Display for RetrievalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chunk admitted to the result set, with the score that justifies its
/// inclusion and its final rank (0 = best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedChunk {
    pub chunk: Chunk,
    pub score: f64,
    pub rank: usize,
}

/// The ranked subset of a document's chunks for one query.
///
/// Empty only when the document has zero chunks or no chunk cleared the
/// producing tier's minimum score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub method: RetrievalMethod,
    pub hits: Vec<RankedChunk>,
    /// One event per tier skipped before `method` produced the output.
    pub fallbacks: Vec<FallbackEvent>,
}

impl RetrievalResult {
    pub fn empty(method: RetrievalMethod) -> Self {
        Self {
            method,
            hits: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Concatenated hit texts in rank order, used as the evidence body
    /// for decision rules.
    pub fn evidence_text(&self) -> String {
        self.hits
            .iter()
            .map(|h| h.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
