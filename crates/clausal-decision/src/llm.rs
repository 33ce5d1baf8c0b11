//! Optional LLM commentary path.
//!
//! The rule-based synthesizer never depends on this: commentary is a
//! supplement attached to the response when an analyzer is configured
//! and reachable, and every failure degrades to `None`.

use clausal_core::models::{ParsedQuery, RetrievalResult};
use clausal_core::traits::ILlmAnalyzer;
use tracing::warn;

/// Build the analysis prompt from the query and retrieved evidence.
pub fn build_prompt(query: &ParsedQuery, retrieval: &RetrievalResult) -> String {
    let mut prompt = String::from(
        "Assess the following request against the quoted document excerpts. \
         Answer with a short rationale.\n\n",
    );
    prompt.push_str(&format!("Request: {}\n", query.text));
    prompt.push_str(&format!("Domain: {}\n\nExcerpts:\n", query.domain));
    for hit in &retrieval.hits {
        prompt.push_str(&format!("[{}] {}\n", hit.rank + 1, hit.chunk.text));
    }
    prompt
}

/// Ask the analyzer for supplementary commentary.
pub fn commentary(
    analyzer: &dyn ILlmAnalyzer,
    query: &ParsedQuery,
    retrieval: &RetrievalResult,
) -> Option<String> {
    let prompt = build_prompt(query, retrieval);
    match analyzer.analyze(&prompt) {
        Ok(text) if !text.trim().is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "llm analyzer failed, continuing without commentary");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausal_core::errors::{ClausalResult, DecisionError};
    use clausal_core::models::{Domain, RetrievalMethod};
    use std::collections::BTreeMap;

    struct EchoAnalyzer;
    impl ILlmAnalyzer for EchoAnalyzer {
        fn analyze(&self, prompt: &str) -> ClausalResult<String> {
            Ok(format!("echo: {}", prompt.len()))
        }
    }

    struct DownAnalyzer;
    impl ILlmAnalyzer for DownAnalyzer {
        fn analyze(&self, _prompt: &str) -> ClausalResult<String> {
            Err(DecisionError::AnalyzerUnavailable {
                reason: "connection refused".to_string(),
            }
            .into())
        }
    }

    fn query() -> ParsedQuery {
        ParsedQuery {
            text: "is knee surgery covered".to_string(),
            fields: BTreeMap::new(),
            domain: Domain::Insurance,
        }
    }

    #[test]
    fn working_analyzer_produces_commentary() {
        let r = RetrievalResult::empty(RetrievalMethod::Keyword);
        assert!(commentary(&EchoAnalyzer, &query(), &r).is_some());
    }

    #[test]
    fn failing_analyzer_degrades_to_none() {
        let r = RetrievalResult::empty(RetrievalMethod::Keyword);
        assert!(commentary(&DownAnalyzer, &query(), &r).is_none());
    }

    #[test]
    fn prompt_includes_query_and_excerpts() {
        let r = RetrievalResult::empty(RetrievalMethod::Keyword);
        let prompt = build_prompt(&query(), &r);
        assert!(prompt.contains("is knee surgery covered"));
        assert!(prompt.contains("insurance"));
    }
}
