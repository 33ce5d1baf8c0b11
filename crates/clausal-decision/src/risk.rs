//! Secondary risk assessment.
//!
//! Risk is orthogonal to the decision status: it reflects how much the
//! evidence could be hiding. Missing key fields and strongly
//! conflicting rule contributions each elevate the level one step from
//! the status baseline.

use clausal_core::models::{DecisionStatus, ParsedQuery, QueryField, RiskLevel};

use crate::rules::RuleFire;

/// Contribution magnitude treated as a strong signal when checking for
/// conflicts.
const CONFLICT_MAGNITUDE: f64 = 2.0;

pub fn assess(
    query: &ParsedQuery,
    fires: &[RuleFire],
    status: DecisionStatus,
    evidence_missing: bool,
) -> RiskLevel {
    if evidence_missing {
        return RiskLevel::High;
    }

    let mut level = match status {
        DecisionStatus::Approved => RiskLevel::Low,
        DecisionStatus::Pending => RiskLevel::Medium,
        DecisionStatus::Rejected => RiskLevel::High,
    };

    if !query.has(QueryField::Age) || !query.has(QueryField::PolicyDuration) {
        level = elevate(level);
    }

    let strong_positive = fires.iter().any(|f| f.contribution >= CONFLICT_MAGNITUDE);
    let strong_negative = fires.iter().any(|f| f.contribution <= -CONFLICT_MAGNITUDE);
    if strong_positive && strong_negative {
        level = elevate(level);
    }

    level
}

fn elevate(level: RiskLevel) -> RiskLevel {
    match level {
        RiskLevel::Low => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}
