use crate::errors::ClausalResult;
use crate::models::{Document, ParsedQuery, RankedChunk, RetrievalMethod};

/// One interchangeable retrieval strategy.
///
/// Tiers signal failure exclusively through
/// `RetrievalError::TierUnavailable`; the engine catches that case and
/// moves to the next tier. Any other error is treated as a programmer
/// error and propagates.
pub trait IRetrievalTier: Send + Sync {
    /// Rank the document's chunks against the query, best first.
    ///
    /// Returns at most `top_k` chunks that cleared the tier's minimum
    /// score; equal scores order by chunk sequence index ascending.
    fn rank(
        &self,
        document: &Document,
        query: &ParsedQuery,
        top_k: usize,
    ) -> ClausalResult<Vec<RankedChunk>>;

    /// The method tag stamped on results this tier produces.
    fn method(&self) -> RetrievalMethod;

    /// Cheap availability probe; unavailable tiers are skipped without
    /// being invoked.
    fn is_available(&self) -> bool;
}
