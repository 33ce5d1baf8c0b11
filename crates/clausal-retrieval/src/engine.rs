//! RetrievalEngine: ordered tiers with automatic capability fallback.
//!
//! The engine walks its tier list in priority order, skips tiers that
//! report unavailable, catches the `TierUnavailable` failure signal —
//! and only that signal — and stamps the result with the tier that
//! actually produced it. One [`FallbackEvent`] is recorded per hop so
//! callers can explain why a lower-quality method answered.

use std::sync::Arc;

use chrono::Utc;
use clausal_core::config::RetrievalConfig;
use clausal_core::errors::ClausalResult;
use clausal_core::models::{Document, FallbackEvent, ParsedQuery, RetrievalMethod, RetrievalResult};
use clausal_core::traits::IRetrievalTier;
use clausal_embeddings::ModelHolder;
use tracing::{debug, info, warn};

use crate::tiers::{EmbeddingTier, KeywordTier, LexicalTier};

pub struct RetrievalEngine {
    tiers: Vec<Box<dyn IRetrievalTier>>,
    top_k: usize,
}

impl RetrievalEngine {
    /// Build the standard three-tier engine. The embedding model holder
    /// is injected so it can be shared across engines and requests.
    pub fn new(config: &RetrievalConfig, holder: Arc<ModelHolder>) -> Self {
        Self {
            tiers: vec![
                Box::new(EmbeddingTier::new(holder, config)),
                Box::new(LexicalTier::new(config)),
                Box::new(KeywordTier::new()),
            ],
            top_k: config.top_k,
        }
    }

    /// Build an engine over an explicit tier list. Tests use this to
    /// force tier failures.
    pub fn with_tiers(tiers: Vec<Box<dyn IRetrievalTier>>, top_k: usize) -> Self {
        Self { tiers, top_k }
    }

    /// Retrieve the most relevant chunks for the query.
    ///
    /// Never fails the caller for lack of capability: a zero-chunk
    /// document yields an empty keyword-tagged result, and tier
    /// failures fall through to the next tier. Only programmer errors
    /// propagate.
    pub fn retrieve(
        &self,
        document: &Document,
        query: &ParsedQuery,
    ) -> ClausalResult<RetrievalResult> {
        if document.is_empty() {
            debug!(document = %document.id, "empty document, nothing to retrieve");
            return Ok(RetrievalResult::empty(RetrievalMethod::Keyword));
        }

        let mut fallbacks: Vec<FallbackEvent> = Vec::new();

        for (i, tier) in self.tiers.iter().enumerate() {
            if !tier.is_available() {
                self.record_hop(&mut fallbacks, i, "tier reports unavailable".to_string());
                continue;
            }

            match tier.rank(document, query, self.top_k) {
                Ok(hits) => {
                    info!(
                        method = %tier.method(),
                        hits = hits.len(),
                        fallbacks = fallbacks.len(),
                        "retrieval complete"
                    );
                    return Ok(RetrievalResult {
                        method: tier.method(),
                        hits,
                        fallbacks,
                    });
                }
                Err(e) if e.is_tier_unavailable() => {
                    warn!(method = %tier.method(), error = %e, "tier failed, falling back");
                    self.record_hop(&mut fallbacks, i, e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        // Reachable only with a custom tier list whose last tier failed;
        // the standard keyword tier cannot.
        let method = self
            .tiers
            .last()
            .map(|t| t.method())
            .unwrap_or(RetrievalMethod::Keyword);
        Ok(RetrievalResult {
            method,
            hits: Vec::new(),
            fallbacks,
        })
    }

    fn record_hop(&self, fallbacks: &mut Vec<FallbackEvent>, index: usize, reason: String) {
        if let (Some(from), Some(to)) = (self.tiers.get(index), self.tiers.get(index + 1)) {
            fallbacks.push(FallbackEvent {
                from_tier: from.method(),
                to_tier: to.method(),
                reason,
                timestamp: Utc::now(),
            });
        }
    }
}
