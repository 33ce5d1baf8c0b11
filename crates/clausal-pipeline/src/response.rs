//! Response-contract assembly.
//!
//! Packages the decision together with the retrieval metadata that
//! explains it: which tier answered, the ranked excerpts, any fallback
//! hops, and advisory lists for the caller's workflow.

use chrono::Utc;
use clausal_core::models::{
    AnalysisResponse, Decision, ParsedQuery, QueryEcho, RankedExcerpt, RetrievalResult,
    RetrievalSummary,
};
use clausal_decision::advisory;
use clausal_query::summarize;
use uuid::Uuid;

/// Maximum characters of chunk text echoed per excerpt.
const EXCERPT_PREVIEW_CHARS: usize = 240;

pub fn assemble(
    query: ParsedQuery,
    decision: Decision,
    retrieval: RetrievalResult,
    llm_commentary: Option<String>,
) -> AnalysisResponse {
    let recommendations = advisory::recommendations(&decision);
    let next_steps = advisory::next_steps(&decision);

    let excerpts: Vec<RankedExcerpt> = retrieval
        .hits
        .iter()
        .map(|hit| RankedExcerpt {
            rank: hit.rank,
            score: hit.score,
            excerpt: preview(&hit.chunk.text),
        })
        .collect();

    AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        query: QueryEcho {
            summary: summarize(&query),
            original: query.text,
            fields: query.fields,
            domain: query.domain,
        },
        decision,
        retrieval: RetrievalSummary {
            method: retrieval.method,
            hit_count: retrieval.hits.len(),
            excerpts,
            fallbacks: retrieval.fallbacks,
        },
        recommendations,
        next_steps,
        llm_commentary,
    }
}

/// Char-boundary-safe preview of a chunk text.
fn preview(text: &str) -> String {
    if text.chars().count() <= EXCERPT_PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}
