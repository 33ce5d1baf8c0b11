//! Tier 2: per-document TF-IDF with synonym expansion.
//!
//! Fits a TF-IDF space over the document's chunks, expands the query
//! with the domain-synonym table before vectorizing, and ranks by
//! cosine similarity. A document with no indexable terms makes the tier
//! unavailable.

use clausal_core::config::RetrievalConfig;
use clausal_core::errors::{ClausalError, ClausalResult, RetrievalError};
use clausal_core::models::{Document, ParsedQuery, RankedChunk, RetrievalMethod};
use clausal_core::traits::IRetrievalTier;
use tracing::debug;

use crate::expansion;
use crate::tfidf::TfIdfSpace;
use crate::tiers::rank_hits;

pub struct LexicalTier {
    min_score: f64,
}

impl LexicalTier {
    pub fn new(config: &RetrievalConfig) -> Self {
        Self {
            min_score: config.lexical_min_score,
        }
    }
}

impl IRetrievalTier for LexicalTier {
    fn rank(
        &self,
        document: &Document,
        query: &ParsedQuery,
        top_k: usize,
    ) -> ClausalResult<Vec<RankedChunk>> {
        let texts: Vec<String> = document.chunks.iter().map(|c| c.text.clone()).collect();
        let space = TfIdfSpace::fit(&texts).ok_or_else(|| {
            ClausalError::from(RetrievalError::TierUnavailable {
                tier: RetrievalMethod::Lexical.as_str().to_string(),
                reason: "no indexable terms in document".to_string(),
            })
        })?;

        let expanded = expansion::expand(&query.text.to_lowercase());
        debug!(original = %query.text, expanded = %expanded, "lexical query expanded");

        let query_vector = space.vectorize(&expanded);
        let scores = space.score(&query_vector);
        Ok(rank_hits(document, scores, self.min_score, top_k))
    }

    fn method(&self) -> RetrievalMethod {
        RetrievalMethod::Lexical
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

    fn tier() -> LexicalTier {
        LexicalTier::new(&RetrievalConfig::default())
    }

    #[test]
    fn matching_chunk_ranks_first() {
        let d = doc(&[
            "knee surgery has a ninety day waiting period",
            "dental cleanings are covered twice per year",
        ]);
        let hits = tier().rank(&d, &query("knee surgery waiting period"), 2).unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].chunk.index, 0);
    }

    #[test]
    fn synonym_expansion_bridges_vocabulary() {
        // The query says "knee", the document only says "orthopedic" —
        // only the synonym table can connect them.
        let d = doc(&[
            "orthopedic procedures require prior authorization",
            "premium payments are due on the first of the month",
        ]);
        let hits = tier().rank(&d, &query("knee replacement"), 2).unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].chunk.index, 0);
    }

    #[test]
    fn termless_document_is_unavailable() {
        let d = doc(&["!!!", "???"]);
        let err = tier().rank(&d, &query("anything"), 3).unwrap_err();
        assert!(err.is_tier_unavailable());
    }

    #[test]
    fn unrelated_query_returns_no_hits() {
        let d = doc(&["coverage begins after enrollment"]);
        let hits = tier().rank(&d, &query("zzz qqq"), 3).unwrap();
        assert!(hits.is_empty());
    }
}
