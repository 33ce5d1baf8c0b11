use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::decision::Decision;
use super::fallback_event::FallbackEvent;
use super::parsed_query::{Domain, QueryField};
use super::retrieval_result::RetrievalMethod;

/// Echo of the parsed query in the response contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEcho {
    pub original: String,
    pub fields: BTreeMap<QueryField, String>,
    pub domain: Domain,
    /// Human-readable restatement of the extracted fields.
    pub summary: String,
}

/// One retrieved excerpt exposed for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedExcerpt {
    pub rank: usize,
    pub score: f64,
    pub excerpt: String,
}

/// Retrieval metadata carried alongside the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalSummary {
    pub method: RetrievalMethod,
    pub hit_count: usize,
    pub excerpts: Vec<RankedExcerpt>,
    pub fallbacks: Vec<FallbackEvent>,
}

/// The full analysis contract consumed by presentation layers.
///
/// Everything a caller needs to render the decision and trace it back to
/// the retrieved text that supports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub query: QueryEcho,
    pub decision: Decision,
    pub retrieval: RetrievalSummary,
    /// Status-keyed advisory lists for the caller's workflow.
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    /// Commentary from the optional LLM collaborator, when configured
    /// and reachable. The decision itself never depends on it.
    pub llm_commentary: Option<String>,
}
