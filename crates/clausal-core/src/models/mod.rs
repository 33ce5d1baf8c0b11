//! Value objects flowing through the pipeline.
//!
//! Document and Chunk are created once at ingestion and read-only after.
//! ParsedQuery, RetrievalResult, and Decision are created per request and
//! discarded once the response is assembled.

mod decision;
mod document;
mod fallback_event;
mod parsed_query;
mod response;
mod retrieval_result;

pub use decision::{ConfidenceLevel, Decision, DecisionStatus, RiskLevel};
pub use document::{Chunk, Document};
pub use fallback_event::FallbackEvent;
pub use parsed_query::{Domain, ParsedQuery, QueryField};
pub use response::{AnalysisResponse, QueryEcho, RankedExcerpt, RetrievalSummary};
pub use retrieval_result::{RankedChunk, RetrievalMethod, RetrievalResult};
