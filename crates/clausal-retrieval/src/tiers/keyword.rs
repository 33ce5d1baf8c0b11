//! Tier 3: keyword-overlap ranking.
//!
//! Jaccard similarity over lowercase token sets. No model, no fitted
//! space, no failure mode — the tier of last resort. It may
//! legitimately return zero hits when query and document share no
//! token.

use std::collections::HashSet;

use clausal_core::errors::ClausalResult;
use clausal_core::models::{Document, ParsedQuery, RankedChunk, RetrievalMethod};
use clausal_core::traits::IRetrievalTier;

use crate::tiers::rank_hits;

pub struct KeywordTier;

impl KeywordTier {
    pub fn new() -> Self {
        Self
    }

    fn token_set(text: &str) -> HashSet<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
        let intersection = a.intersection(b).count();
        let union = a.union(b).count();
        if union == 0 {
            0.0
        } else {
            intersection as f64 / union as f64
        }
    }
}

impl Default for KeywordTier {
    fn default() -> Self {
        Self::new()
    }
}

impl IRetrievalTier for KeywordTier {
    fn rank(
        &self,
        document: &Document,
        query: &ParsedQuery,
        top_k: usize,
    ) -> ClausalResult<Vec<RankedChunk>> {
        let query_tokens = Self::token_set(&query.text);
        let scores: Vec<(usize, f64)> = document
            .chunks
            .iter()
            .map(|chunk| {
                let chunk_tokens = Self::token_set(&chunk.text);
                (chunk.index, Self::jaccard(&query_tokens, &chunk_tokens))
            })
            .collect();
        // A strictly positive overlap is required for inclusion.
        Ok(rank_hits(document, scores, 0.0, top_k))
    }

    fn method(&self) -> RetrievalMethod {
        RetrievalMethod::Keyword
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausal_core::models::{Chunk, Domain};
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

    #[test]
    fn overlapping_chunk_ranks_first() {
        let d = doc(&[
            "knee surgery coverage details",
            "unrelated payroll schedule",
        ]);
        let hits = KeywordTier::new().rank(&d, &query("knee surgery"), 2).unwrap();
        assert_eq!(hits[0].chunk.index, 0);
    }

    #[test]
    fn zero_overlap_yields_zero_hits() {
        let d = doc(&["alpha beta gamma"]);
        let hits = KeywordTier::new().rank(&d, &query("delta epsilon"), 3).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn equal_scores_break_ties_by_sequence_index() {
        // Both chunks share exactly one token with the query and have
        // the same token count, so their Jaccard scores are equal.
        let d = doc(&["knee brace fitting", "knee wrap removal"]);
        let hits = KeywordTier::new().rank(&d, &query("knee"), 2).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].chunk.index, 0);
        assert_eq!(hits[1].chunk.index, 1);
        assert_eq!(hits[0].score, hits[1].score);
    }

    #[test]
    fn case_is_ignored() {
        let d = doc(&["KNEE SURGERY terms"]);
        let hits = KeywordTier::new().rank(&d, &query("knee surgery"), 1).unwrap();
        assert!(!hits.is_empty());
    }
}
