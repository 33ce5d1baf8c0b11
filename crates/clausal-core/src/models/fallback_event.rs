use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::retrieval_result::RetrievalMethod;

/// Record of one retrieval tier being skipped during fallback.
///
/// The engine emits one event per hop so callers can explain why a
/// lower-quality method produced the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackEvent {
    pub from_tier: RetrievalMethod,
    pub to_tier: RetrievalMethod,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}
