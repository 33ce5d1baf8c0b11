use serde::{Deserialize, Serialize};

/// A bounded, overlapping span of document text — the unit of retrieval.
///
/// Owned exclusively by its parent [`Document`]; never shared across
/// documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The span text.
    pub text: String,
    /// Byte offset of the span start within the normalized document text.
    pub start: usize,
    /// Byte offset one past the span end.
    pub end: usize,
    /// Position in the document's chunk sequence. Earlier chunks win
    /// score ties during retrieval.
    pub index: usize,
}

/// An ingested document: normalized text plus its ordered chunk cover.
///
/// Immutable after construction and safe to read from concurrent
/// requests. Chunks cover the full normalized text with a fixed overlap
/// between neighbors; an empty text carries zero chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Content id: blake3 hex of the normalized text. Stable across
    /// re-ingestion of identical content, so caches can key on it.
    pub id: String,
    /// The normalized text all chunk offsets refer to.
    pub text: String,
    /// Ordered overlapping chunks covering `text`.
    pub chunks: Vec<Chunk>,
}

impl Document {
    /// Build a document from normalized text and its chunk cover.
    pub fn new(text: String, chunks: Vec<Chunk>) -> Self {
        let id = blake3::hash(text.as_bytes()).to_hex().to_string();
        Self { id, text, chunks }
    }

    /// Whether the document has no retrievable content.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_for_identical_text() {
        let a = Document::new("policy text".to_string(), vec![]);
        let b = Document::new("policy text".to_string(), vec![]);
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn id_differs_for_different_text() {
        let a = Document::new("policy text".to_string(), vec![]);
        let b = Document::new("other text".to_string(), vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_document_has_no_chunks() {
        let doc = Document::new(String::new(), vec![]);
        assert!(doc.is_empty());
        assert_eq!(doc.chunk_count(), 0);
    }
}
