use crate::errors::ClausalResult;

/// External text-extraction collaborator (PDF/Word/email parsing lives
/// behind this boundary, outside the core).
///
/// Implementations return normalized plain text or
/// `IngestError::ExtractionFailed`; the pipeline maps a failure to a
/// zero-chunk document rather than failing the request.
pub trait ITextExtractor: Send + Sync {
    fn extract(&self, raw: &[u8], format_hint: &str) -> ClausalResult<String>;
}
