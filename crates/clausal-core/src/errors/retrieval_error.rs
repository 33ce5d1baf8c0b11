/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The fallback signal: a tier could not initialize or score.
    /// Caught by the engine, which moves to the next tier; never
    /// surfaces to callers.
    #[error("retrieval tier '{tier}' unavailable: {reason}")]
    TierUnavailable { tier: String, reason: String },

    #[error("vector index not built for document {document_id}")]
    IndexNotBuilt { document_id: String },
}
