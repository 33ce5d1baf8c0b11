/// Ingestion subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("text extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    #[error("unsupported document format: {format}")]
    UnsupportedFormat { format: String },
}
