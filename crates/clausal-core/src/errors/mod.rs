//! Error taxonomy for the clausal workspace.
//!
//! One enum per subsystem, unified under [`ClausalError`]. An unmatched
//! query field and an empty retrieval result are ordinary values, not
//! errors; errors here are reserved for real failures and programmer
//! mistakes (invalid configuration).

mod decision_error;
mod embedding_error;
mod ingest_error;
mod retrieval_error;

pub use decision_error::DecisionError;
pub use embedding_error::EmbeddingError;
pub use ingest_error::IngestError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the clausal workspace.
#[derive(Debug, thiserror::Error)]
pub enum ClausalError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

/// Convenience alias used across the workspace.
pub type ClausalResult<T> = Result<T, ClausalError>;

impl ClausalError {
    /// Whether this error is the retrieval-tier fallback signal.
    ///
    /// The retrieval engine consumes exactly this case; everything else
    /// propagates to the caller.
    pub fn is_tier_unavailable(&self) -> bool {
        matches!(
            self,
            ClausalError::Retrieval(RetrievalError::TierUnavailable { .. })
        )
    }
}
