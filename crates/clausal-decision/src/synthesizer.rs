//! DecisionSynthesizer: rule evaluation, thresholding, and assembly.

use clausal_core::config::DecisionConfig;
use clausal_core::models::{
    ConfidenceLevel, Decision, DecisionStatus, ParsedQuery, RetrievalResult, RiskLevel,
};
use tracing::debug;

use crate::justification;
use crate::risk;
use crate::rules::{self, RuleFire};

pub struct DecisionSynthesizer {
    config: DecisionConfig,
}

impl DecisionSynthesizer {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    /// Synthesize a decision from the parsed query and retrieved
    /// evidence.
    ///
    /// Total and deterministic: an empty retrieval yields a Pending
    /// low-confidence decision rather than an error, and identical
    /// inputs always produce identical output.
    pub fn decide(&self, query: &ParsedQuery, retrieval: &RetrievalResult) -> Decision {
        if retrieval.is_empty() {
            return self.insufficient_evidence(query);
        }

        let evidence = retrieval.evidence_text().to_lowercase();
        let table = rules::rule_table(query.domain);

        let fires: Vec<RuleFire> = table
            .iter()
            .filter_map(|rule| rules::evaluate(rule, query, &evidence))
            .collect();
        let score: f64 = fires.iter().map(|f| f.contribution).sum();

        let status = self.classify(score);
        let confidence = self.confidence(score, status, &fires);
        let risk = risk::assess(query, &fires, status, false);

        debug!(
            domain = %query.domain,
            score,
            fired = fires.len(),
            status = %status,
            "decision synthesized"
        );

        Decision {
            status,
            confidence,
            risk,
            summary: justification::summary(status, &fires),
            factors: justification::factors(&fires),
            clause_references: justification::clause_references(&fires, retrieval),
        }
    }

    /// Decision for a zero-chunk document: there is nothing to analyze,
    /// which is stronger than merely finding no relevant chunks.
    pub fn no_content_decision(&self) -> Decision {
        Decision {
            status: DecisionStatus::Pending,
            confidence: ConfidenceLevel::Low,
            risk: RiskLevel::High,
            summary: "The document contains no content to analyze; a decision cannot be made."
                .to_string(),
            factors: vec!["no document content available (+0.0)".to_string()],
            clause_references: Vec::new(),
        }
    }

    fn insufficient_evidence(&self, query: &ParsedQuery) -> Decision {
        let risk = risk::assess(query, &[], DecisionStatus::Pending, true);
        Decision {
            status: DecisionStatus::Pending,
            confidence: ConfidenceLevel::Low,
            risk,
            summary:
                "No relevant clauses were retrieved; there is insufficient evidence to decide."
                    .to_string(),
            factors: vec!["no supporting evidence retrieved (+0.0)".to_string()],
            clause_references: Vec::new(),
        }
    }

    /// Closed-threshold classification: scores equal to a threshold
    /// fall on that threshold's side.
    fn classify(&self, score: f64) -> DecisionStatus {
        if score >= self.config.approve_threshold {
            DecisionStatus::Approved
        } else if score <= self.config.reject_threshold {
            DecisionStatus::Rejected
        } else {
            DecisionStatus::Pending
        }
    }

    /// Confidence from the margin beyond the crossed threshold; Pending
    /// confidence reflects whether any rule produced signal at all.
    fn confidence(
        &self,
        score: f64,
        status: DecisionStatus,
        fires: &[RuleFire],
    ) -> ConfidenceLevel {
        match status {
            DecisionStatus::Approved => {
                if score - self.config.approve_threshold >= self.config.high_confidence_margin {
                    ConfidenceLevel::High
                } else {
                    ConfidenceLevel::Medium
                }
            }
            DecisionStatus::Rejected => {
                if self.config.reject_threshold - score >= self.config.high_confidence_margin {
                    ConfidenceLevel::High
                } else {
                    ConfidenceLevel::Medium
                }
            }
            DecisionStatus::Pending => {
                if fires.is_empty() {
                    ConfidenceLevel::Low
                } else {
                    ConfidenceLevel::Medium
                }
            }
        }
    }
}

impl Default for DecisionSynthesizer {
    fn default() -> Self {
        Self::new(DecisionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausal_core::models::{Chunk, Domain, QueryField, RankedChunk, RetrievalMethod};
    use std::collections::BTreeMap;

    fn synthesizer() -> DecisionSynthesizer {
        DecisionSynthesizer::default()
    }

    fn query(fields: &[(QueryField, &str)], domain: Domain, text: &str) -> ParsedQuery {
        ParsedQuery {
            text: text.to_string(),
            fields: fields
                .iter()
                .map(|(f, v)| (*f, v.to_string()))
                .collect::<BTreeMap<_, _>>(),
            domain,
        }
    }

    fn retrieval(texts: &[&str]) -> RetrievalResult {
        RetrievalResult {
            method: RetrievalMethod::Lexical,
            hits: texts
                .iter()
                .enumerate()
                .map(|(i, t)| RankedChunk {
                    chunk: Chunk {
                        text: t.to_string(),
                        start: 0,
                        end: t.len(),
                        index: i,
                    },
                    score: 0.9 - i as f64 * 0.1,
                    rank: i,
                })
                .collect(),
            fallbacks: Vec::new(),
        }
    }

    #[test]
    fn favorable_evidence_approves() {
        let q = query(
            &[
                (QueryField::Age, "46"),
                (QueryField::Procedure, "knee surgery"),
                (QueryField::PolicyDuration, "12 months"),
            ],
            Domain::Insurance,
            "46-year-old, knee surgery, 12-month policy",
        );
        let r = retrieval(&[
            "knee surgery is covered for all members after a waiting period of 90 days",
        ]);
        let decision = synthesizer().decide(&q, &r);
        assert_eq!(decision.status, DecisionStatus::Approved);
        assert!(!decision.factors.is_empty());
        assert!(!decision.clause_references.is_empty());
    }

    #[test]
    fn exclusionary_evidence_rejects() {
        let q = query(
            &[(QueryField::Procedure, "cosmetic surgery")],
            Domain::Insurance,
            "cosmetic surgery claim",
        );
        let r = retrieval(&[
            "cosmetic surgery is excluded from coverage; such claims are denied and restricted",
        ]);
        let decision = synthesizer().decide(&q, &r);
        assert_eq!(decision.status, DecisionStatus::Rejected);
        assert_eq!(decision.risk, RiskLevel::High);
    }

    #[test]
    fn empty_retrieval_is_pending_low_high_risk() {
        let q = query(&[], Domain::General, "anything");
        let decision = synthesizer().decide(&q, &RetrievalResult::empty(RetrievalMethod::Keyword));
        assert_eq!(decision.status, DecisionStatus::Pending);
        assert_eq!(decision.confidence, ConfidenceLevel::Low);
        assert_eq!(decision.risk, RiskLevel::High);
        assert!(decision.summary.contains("insufficient evidence"));
    }

    #[test]
    fn no_content_decision_names_the_problem() {
        let decision = synthesizer().no_content_decision();
        assert_eq!(decision.status, DecisionStatus::Pending);
        assert_eq!(decision.confidence, ConfidenceLevel::Low);
        assert!(decision.summary.contains("no content to analyze"));
    }

    #[test]
    fn identical_inputs_yield_byte_identical_decisions() {
        let q = query(
            &[(QueryField::Procedure, "knee surgery")],
            Domain::Insurance,
            "knee surgery",
        );
        let r = retrieval(&["knee surgery is covered under the plan benefits"]);
        let s = synthesizer();
        let a = serde_json::to_vec(&s.decide(&q, &r)).unwrap();
        let b = serde_json::to_vec(&s.decide(&q, &r)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn approve_threshold_is_inclusive() {
        let s = synthesizer();
        assert_eq!(s.classify(3.0), DecisionStatus::Approved);
        assert_eq!(s.classify(2.999), DecisionStatus::Pending);
    }

    #[test]
    fn reject_threshold_is_inclusive() {
        let s = synthesizer();
        assert_eq!(s.classify(-3.0), DecisionStatus::Rejected);
        assert_eq!(s.classify(-2.999), DecisionStatus::Pending);
    }

    #[test]
    fn confidence_tracks_margin() {
        let s = synthesizer();
        assert_eq!(
            s.confidence(5.0, DecisionStatus::Approved, &[]),
            ConfidenceLevel::High
        );
        assert_eq!(
            s.confidence(3.5, DecisionStatus::Approved, &[]),
            ConfidenceLevel::Medium
        );
        assert_eq!(
            s.confidence(-5.0, DecisionStatus::Rejected, &[]),
            ConfidenceLevel::High
        );
    }
}
