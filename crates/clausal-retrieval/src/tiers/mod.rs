//! The three retrieval strategies, in fallback priority order.

pub mod embedding;
pub mod keyword;
pub mod lexical;

pub use embedding::EmbeddingTier;
pub use keyword::KeywordTier;
pub use lexical::LexicalTier;

use std::cmp::Ordering;

use clausal_core::models::{Document, RankedChunk};

/// Turn per-chunk scores into the ranked hit list every tier returns.
///
/// Scores at or below `min_score` are dropped — results are never
/// padded with low-relevance chunks. Equal scores order by chunk
/// sequence index ascending so output is deterministic.
pub(crate) fn rank_hits(
    document: &Document,
    mut scores: Vec<(usize, f64)>,
    min_score: f64,
    top_k: usize,
) -> Vec<RankedChunk> {
    scores.retain(|(_, score)| *score > min_score);
    scores.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scores.truncate(top_k);
    scores
        .into_iter()
        .enumerate()
        .map(|(rank, (index, score))| RankedChunk {
            chunk: document.chunks[index].clone(),
            score,
            rank,
        })
        .collect()
}
