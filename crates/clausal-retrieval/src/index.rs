//! Per-document dense vector index.
//!
//! Exact inner-product search over L2-normalized chunk vectors, so the
//! scores are cosine similarities. Built once per document and cached by
//! the embedding tier for the document's lifetime.

use clausal_core::errors::ClausalResult;
use clausal_core::traits::IEmbeddingProvider;

/// Dense index over one document's chunks.
pub struct ChunkIndex {
    /// One normalized vector per chunk, in chunk order.
    vectors: Vec<Vec<f32>>,
}

impl ChunkIndex {
    /// Embed every chunk text and build the index.
    pub fn build(
        provider: &dyn IEmbeddingProvider,
        chunk_texts: &[String],
    ) -> ClausalResult<Self> {
        let mut vectors = provider.embed_batch(chunk_texts)?;
        for v in &mut vectors {
            normalize(v);
        }
        Ok(Self { vectors })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Score every chunk against the query vector.
    ///
    /// Returns `(chunk_index, cosine)` pairs in chunk order; the caller
    /// ranks and thresholds.
    pub fn score(&self, query: &[f32]) -> Vec<(usize, f64)> {
        let mut query = query.to_vec();
        normalize(&mut query);
        self.vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, dot(&query, v)))
            .collect()
    }
}

fn normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausal_embeddings::HashedBowEmbedder;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn index_has_one_vector_per_chunk() {
        let provider = HashedBowEmbedder::new(64);
        let index = ChunkIndex::build(&provider, &texts(&["alpha", "beta", "gamma"])).unwrap();
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn identical_text_scores_highest() {
        let provider = HashedBowEmbedder::new(128);
        let index = ChunkIndex::build(
            &provider,
            &texts(&["knee surgery coverage", "premium payment schedule"]),
        )
        .unwrap();
        let query = provider.embed("knee surgery coverage").unwrap();
        let scores = index.score(&query);
        assert!(scores[0].1 > scores[1].1);
        assert!((scores[0].1 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_document_builds_empty_index() {
        let provider = HashedBowEmbedder::new(32);
        let index = ChunkIndex::build(&provider, &[]).unwrap();
        assert!(index.is_empty());
        assert!(index.score(&vec![0.5; 32]).is_empty());
    }
}
