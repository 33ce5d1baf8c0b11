//! Hash-keyed read-through embedding cache.
//!
//! Chunk texts repeat across requests against the same document; the
//! cache keys on the blake3 hash of the text so identical content never
//! runs inference twice.

use std::sync::Arc;
use std::time::Duration;

use clausal_core::errors::ClausalResult;
use clausal_core::traits::IEmbeddingProvider;
use moka::sync::Cache;

/// Wraps any provider with a moka cache.
pub struct CachedEmbedder {
    inner: Arc<dyn IEmbeddingProvider>,
    cache: Cache<String, Vec<f32>>,
}

impl CachedEmbedder {
    pub fn new(inner: Arc<dyn IEmbeddingProvider>, capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { inner, cache }
    }

    fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }
}

impl IEmbeddingProvider for CachedEmbedder {
    fn embed(&self, text: &str) -> ClausalResult<Vec<f32>> {
        let key = Self::key(text);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let vec = self.inner.embed(text)?;
        self.cache.insert(key, vec.clone());
        Ok(vec)
    }

    fn embed_batch(&self, texts: &[String]) -> ClausalResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
