//! Status-keyed advisory lists for the response contract.

use clausal_core::models::{Decision, DecisionStatus, RiskLevel};

/// Recommendations appropriate to the decision outcome.
pub fn recommendations(decision: &Decision) -> Vec<String> {
    let mut out: Vec<String> = match decision.status {
        DecisionStatus::Approved => vec![
            "proceed with the request through the standard submission channel".to_string(),
            "verify that all supporting documentation is complete".to_string(),
        ],
        DecisionStatus::Rejected => vec![
            "review the cited clauses for the grounds of rejection".to_string(),
            "consider whether an alternative covered option exists".to_string(),
        ],
        DecisionStatus::Pending => vec![
            "gather the additional documentation noted in the factors".to_string(),
            "request a manual review of the cited clauses".to_string(),
        ],
    };
    if decision.risk == RiskLevel::High {
        out.push("escalate for senior review given the elevated risk level".to_string());
    }
    out
}

/// Concrete next steps for the caller's workflow.
pub fn next_steps(decision: &Decision) -> Vec<String> {
    match decision.status {
        DecisionStatus::Approved => vec![
            "submit the formal request with the referenced clauses attached".to_string(),
            "record the decision and its justification for audit".to_string(),
        ],
        DecisionStatus::Rejected => vec![
            "communicate the rejection with the cited clause references".to_string(),
            "document the decision and offer the appeal procedure".to_string(),
        ],
        DecisionStatus::Pending => vec![
            "collect the missing information identified by the analysis".to_string(),
            "resubmit the query once the gaps are filled".to_string(),
        ],
    }
}
