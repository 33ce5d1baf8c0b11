//! Per-domain rule tables and the single interpreter that evaluates
//! them.
//!
//! A rule is data: a condition, a signed weight, and a message
//! template. Keyword conditions scale their contribution with the
//! number of occurrences (capped), mirroring how strongly the policy
//! text leans one way; every other condition fires at most once.

use std::sync::LazyLock;

use clausal_core::models::{Domain, ParsedQuery, QueryField};
use regex::Regex;

/// Occurrence cap for keyword-count conditions.
const KEYWORD_COUNT_CAP: usize = 3;

/// What a rule tests.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Age extracted and within the inclusive range.
    AgeWithin { min: u32, max: u32 },
    /// Age extracted and outside the inclusive range.
    AgeOutside { min: u32, max: u32 },
    /// The extracted field value appears verbatim in the evidence text.
    FieldInEvidence(QueryField),
    /// Any listed keyword appears in the evidence text.
    EvidenceContainsAny(&'static [&'static str]),
    /// Policy duration extracted and at least this many months.
    PolicyAtLeastMonths(u32),
    /// Policy duration extracted and younger than this many months.
    PolicyUnderMonths(u32),
    /// Evidence names a waiting period the policy has already satisfied.
    WaitingPeriodElapsed,
    /// Evidence names a waiting period the policy has not yet satisfied.
    WaitingPeriodNotElapsed,
}

/// One weighted decision rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub weight: f64,
    pub condition: Condition,
    pub message: &'static str,
}

/// A rule that fired, with its evidence trail.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleFire {
    pub name: &'static str,
    /// Signed contribution to the aggregate score.
    pub contribution: f64,
    pub message: &'static str,
    /// The text that matched in the evidence, when the condition reads
    /// the evidence; used to cut clause-reference excerpts.
    pub matched: Option<String>,
}

static WAITING_PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"waiting period of (\d+)\s*(day|month|year)s?").unwrap()
});

/// The rule table for a domain. `General` is the zero-knowledge
/// fallback table.
pub fn rule_table(domain: Domain) -> &'static [Rule] {
    match domain {
        Domain::Insurance => INSURANCE_RULES,
        Domain::Legal => LEGAL_RULES,
        Domain::Hr => HR_RULES,
        Domain::Compliance => COMPLIANCE_RULES,
        Domain::General => GENERAL_RULES,
    }
}

const INSURANCE_RULES: &[Rule] = &[
    Rule {
        name: "age_within_eligibility",
        weight: 1.0,
        condition: Condition::AgeWithin { min: 18, max: 65 },
        message: "applicant age is within the standard eligibility range",
    },
    Rule {
        name: "age_outside_eligibility",
        weight: -1.0,
        condition: Condition::AgeOutside { min: 18, max: 65 },
        message: "applicant age falls outside the standard eligibility range",
    },
    Rule {
        name: "procedure_addressed",
        weight: 2.0,
        condition: Condition::FieldInEvidence(QueryField::Procedure),
        message: "the requested procedure is addressed in the policy text",
    },
    Rule {
        name: "coverage_language",
        weight: 2.0,
        condition: Condition::EvidenceContainsAny(&[
            "covered", "eligible", "included", "benefits", "entitled", "reimbursed",
        ]),
        message: "policy language indicates coverage",
    },
    Rule {
        name: "exclusion_language",
        weight: -3.0,
        condition: Condition::EvidenceContainsAny(&[
            "excluded", "not covered", "denied", "restricted", "limitation",
        ]),
        message: "policy language indicates exclusion or restriction",
    },
    Rule {
        name: "conditional_language",
        weight: -1.0,
        condition: Condition::EvidenceContainsAny(&[
            "subject to", "depends on", "pre-authorization", "prior authorization",
        ]),
        message: "coverage is conditional on further requirements",
    },
    Rule {
        name: "waiting_period_elapsed",
        weight: 2.0,
        condition: Condition::WaitingPeriodElapsed,
        message: "the policy has satisfied the stated waiting period",
    },
    Rule {
        name: "waiting_period_pending",
        weight: -2.0,
        condition: Condition::WaitingPeriodNotElapsed,
        message: "the policy is still within the stated waiting period",
    },
    Rule {
        name: "location_in_network",
        weight: 1.0,
        condition: Condition::FieldInEvidence(QueryField::Location),
        message: "the treatment location appears in the policy text",
    },
    Rule {
        name: "mature_policy",
        weight: 0.5,
        condition: Condition::PolicyAtLeastMonths(12),
        message: "the policy has been active for over a year",
    },
    Rule {
        name: "recent_policy",
        weight: -0.5,
        condition: Condition::PolicyUnderMonths(6),
        message: "the policy is less than six months old",
    },
];

const LEGAL_RULES: &[Rule] = &[
    Rule {
        name: "compliant_language",
        weight: 2.0,
        condition: Condition::EvidenceContainsAny(&[
            "complies", "in accordance", "conforms", "satisfies", "permitted",
        ]),
        message: "the contract language supports compliance",
    },
    Rule {
        name: "violation_language",
        weight: -3.0,
        condition: Condition::EvidenceContainsAny(&[
            "violates", "breach", "non-compliance", "prohibited", "unlawful",
        ]),
        message: "the contract language indicates a violation",
    },
    Rule {
        name: "ambiguous_language",
        weight: -1.0,
        condition: Condition::EvidenceContainsAny(&[
            "ambiguous", "interpretation", "review required",
        ]),
        message: "the contract language is ambiguous and needs interpretation",
    },
    Rule {
        name: "matter_addressed",
        weight: 1.0,
        condition: Condition::FieldInEvidence(QueryField::Procedure),
        message: "the matter at issue is addressed in the contract text",
    },
];

const HR_RULES: &[Rule] = &[
    Rule {
        name: "eligibility_language",
        weight: 2.0,
        condition: Condition::EvidenceContainsAny(&[
            "eligible", "entitled", "qualified", "included",
        ]),
        message: "handbook language supports eligibility",
    },
    Rule {
        name: "ineligibility_language",
        weight: -3.0,
        condition: Condition::EvidenceContainsAny(&[
            "ineligible", "excluded", "not covered", "restricted", "unavailable",
        ]),
        message: "handbook language indicates ineligibility",
    },
    Rule {
        name: "approval_required",
        weight: -1.0,
        condition: Condition::EvidenceContainsAny(&[
            "subject to approval", "depends on", "may qualify",
        ]),
        message: "the benefit requires managerial approval",
    },
    Rule {
        name: "benefit_addressed",
        weight: 1.0,
        condition: Condition::FieldInEvidence(QueryField::Procedure),
        message: "the requested benefit is addressed in the handbook text",
    },
];

const COMPLIANCE_RULES: &[Rule] = &[
    Rule {
        name: "conforming_language",
        weight: 2.0,
        condition: Condition::EvidenceContainsAny(&[
            "compliant", "in compliance", "certified", "approved",
        ]),
        message: "the documentation supports regulatory conformance",
    },
    Rule {
        name: "finding_language",
        weight: -3.0,
        condition: Condition::EvidenceContainsAny(&[
            "violation", "non-compliant", "breach", "finding", "deficiency",
        ]),
        message: "the documentation reports unresolved findings",
    },
    Rule {
        name: "open_review_language",
        weight: -1.0,
        condition: Condition::EvidenceContainsAny(&["under review", "pending", "remediation"]),
        message: "matters remain under review",
    },
];

const GENERAL_RULES: &[Rule] = &[
    Rule {
        name: "positive_language",
        weight: 2.0,
        condition: Condition::EvidenceContainsAny(&[
            "covered", "eligible", "approved", "included", "valid",
        ]),
        message: "the document language supports the request",
    },
    Rule {
        name: "negative_language",
        weight: -3.0,
        condition: Condition::EvidenceContainsAny(&[
            "excluded", "not covered", "denied", "invalid", "restricted",
        ]),
        message: "the document language weighs against the request",
    },
    Rule {
        name: "subject_addressed",
        weight: 1.0,
        condition: Condition::FieldInEvidence(QueryField::Procedure),
        message: "the subject of the request is addressed in the document",
    },
];

/// Evaluate one rule. `evidence` must already be lowercased.
pub fn evaluate(rule: &Rule, query: &ParsedQuery, evidence: &str) -> Option<RuleFire> {
    let fire = |contribution: f64, matched: Option<String>| {
        Some(RuleFire {
            name: rule.name,
            contribution,
            message: rule.message,
            matched,
        })
    };

    match rule.condition {
        Condition::AgeWithin { min, max } => {
            let age = query.age()?;
            (min..=max).contains(&age).then_some(())?;
            fire(rule.weight, None)
        }
        Condition::AgeOutside { min, max } => {
            let age = query.age()?;
            (!(min..=max).contains(&age)).then_some(())?;
            fire(rule.weight, None)
        }
        Condition::FieldInEvidence(field) => {
            let value = query.field(field)?.to_lowercase();
            evidence.contains(&value).then_some(())?;
            fire(rule.weight, Some(value))
        }
        Condition::EvidenceContainsAny(keywords) => {
            let mut count = 0usize;
            let mut first_match: Option<String> = None;
            for keyword in keywords {
                let hits = evidence.matches(keyword).count();
                if hits > 0 && first_match.is_none() {
                    first_match = Some((*keyword).to_string());
                }
                count += hits;
            }
            if count == 0 {
                return None;
            }
            let strength = count.min(KEYWORD_COUNT_CAP) as f64;
            fire(rule.weight * strength, first_match)
        }
        Condition::PolicyAtLeastMonths(months) => {
            let age = query.policy_months()?;
            (age >= months).then_some(())?;
            fire(rule.weight, None)
        }
        Condition::PolicyUnderMonths(months) => {
            let age = query.policy_months()?;
            (age < months).then_some(())?;
            fire(rule.weight, None)
        }
        Condition::WaitingPeriodElapsed => {
            let (required, matched) = waiting_period_months(evidence)?;
            let age = query.policy_months()?;
            (age as f64 >= required).then_some(())?;
            fire(rule.weight, Some(matched))
        }
        Condition::WaitingPeriodNotElapsed => {
            let (required, matched) = waiting_period_months(evidence)?;
            let age = query.policy_months()?;
            ((age as f64) < required).then_some(())?;
            fire(rule.weight, Some(matched))
        }
    }
}

/// Parse "waiting period of N days/months/years" from the evidence,
/// returning the requirement in months and the matched phrase.
fn waiting_period_months(evidence: &str) -> Option<(f64, String)> {
    let caps = WAITING_PERIOD_RE.captures(evidence)?;
    let n: f64 = caps[1].parse().ok()?;
    let months = match &caps[2] {
        "day" => n / 30.0,
        "year" => n * 12.0,
        _ => n,
    };
    Some((months, caps[0].to_string()))
}
