//! Tier 1: dense embedding similarity.
//!
//! Embeds chunks and query through the shared model holder and ranks by
//! cosine similarity over a per-document [`ChunkIndex`], built once and
//! cached by document id. Every setup or scoring failure collapses into
//! `TierUnavailable` so the engine can fall through.

use std::sync::Arc;

use clausal_core::config::RetrievalConfig;
use clausal_core::errors::{ClausalError, ClausalResult, RetrievalError};
use clausal_core::models::{Document, ParsedQuery, RankedChunk, RetrievalMethod};
use clausal_core::traits::IRetrievalTier;
use clausal_embeddings::ModelHolder;
use moka::sync::Cache;
use tracing::debug;

use crate::index::ChunkIndex;
use crate::tiers::rank_hits;

pub struct EmbeddingTier {
    holder: Arc<ModelHolder>,
    min_score: f64,
    /// Per-document indices, keyed by document content id. moka's
    /// single-flight init keeps concurrent requests from building the
    /// same index twice.
    index_cache: Cache<String, Arc<ChunkIndex>>,
}

impl EmbeddingTier {
    pub fn new(holder: Arc<ModelHolder>, config: &RetrievalConfig) -> Self {
        Self {
            holder,
            min_score: config.embedding_min_score,
            index_cache: Cache::new(config.index_cache_capacity),
        }
    }

    fn unavailable(reason: String) -> ClausalError {
        RetrievalError::TierUnavailable {
            tier: RetrievalMethod::Embedding.as_str().to_string(),
            reason,
        }
        .into()
    }

    fn index_for(&self, document: &Document) -> ClausalResult<Arc<ChunkIndex>> {
        let provider = self
            .holder
            .provider()
            .map_err(|e| Self::unavailable(e.to_string()))?;

        self.index_cache
            .try_get_with(document.id.clone(), || {
                let texts: Vec<String> =
                    document.chunks.iter().map(|c| c.text.clone()).collect();
                debug!(document = %document.id, chunks = texts.len(), "building chunk index");
                ChunkIndex::build(provider.as_ref(), &texts).map(Arc::new)
            })
            .map_err(|e| Self::unavailable(e.to_string()))
    }
}

impl IRetrievalTier for EmbeddingTier {
    fn rank(
        &self,
        document: &Document,
        query: &ParsedQuery,
        top_k: usize,
    ) -> ClausalResult<Vec<RankedChunk>> {
        let index = self.index_for(document)?;
        let provider = self
            .holder
            .provider()
            .map_err(|e| Self::unavailable(e.to_string()))?;
        let query_vector = provider
            .embed(&query.text)
            .map_err(|e| Self::unavailable(e.to_string()))?;
        let scores = index.score(&query_vector);
        Ok(rank_hits(document, scores, self.min_score, top_k))
    }

    fn method(&self) -> RetrievalMethod {
        RetrievalMethod::Embedding
    }

    fn is_available(&self) -> bool {
        self.holder.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausal_core::config::EmbeddingConfig;
    use clausal_core::models::{Chunk, Domain};
    use clausal_embeddings::HashedBowEmbedder;
    use std::collections::BTreeMap;

    fn doc(texts: &[&str]) -> Document {
        let chunks = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Chunk {
                text: t.to_string(),
                start: 0,
                end: t.len(),
                index: i,
            })
            .collect();
        Document::new(texts.join(" "), chunks)
    }

    fn query(text: &str) -> ParsedQuery {
        ParsedQuery {
            text: text.to_string(),
            fields: BTreeMap::new(),
            domain: Domain::General,
        }
    }

    fn tier_with_mock_model() -> EmbeddingTier {
        let holder = ModelHolder::with_provider(
            EmbeddingConfig::default(),
            Arc::new(HashedBowEmbedder::new(128)),
        );
        EmbeddingTier::new(Arc::new(holder), &RetrievalConfig::default())
    }

    #[test]
    fn ranks_matching_chunk_first() {
        let tier = tier_with_mock_model();
        let d = doc(&[
            "knee surgery is covered after the waiting period",
            "premium payments are due monthly without exception",
        ]);
        let hits = tier.rank(&d, &query("knee surgery waiting period"), 2).unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].chunk.index, 0);
    }

    #[test]
    fn unconfigured_model_reports_unavailable() {
        let holder = Arc::new(ModelHolder::new(EmbeddingConfig::default()));
        let tier = EmbeddingTier::new(holder, &RetrievalConfig::default());
        assert!(!tier.is_available());
        let err = tier
            .rank(&doc(&["some text"]), &query("some text"), 3)
            .unwrap_err();
        assert!(err.is_tier_unavailable());
    }

    #[test]
    fn index_is_reused_across_queries() {
        let tier = tier_with_mock_model();
        let d = doc(&["alpha beta gamma", "delta epsilon zeta"]);
        tier.rank(&d, &query("alpha beta"), 2).unwrap();
        // Second query against the same document id hits the cache.
        assert!(tier.index_cache.get(&d.id).is_some());
        tier.rank(&d, &query("delta epsilon"), 2).unwrap();
    }
}
