//! Keyword-count domain classification.
//!
//! Each supported domain carries a fixed keyword set; the domain with
//! the most hits in the query wins, ties resolve by the declaration
//! order of `Domain::CLASSIFIABLE`, and zero hits falls back to
//! `General`.

use clausal_core::models::Domain;

/// Keyword families per classifiable domain.
fn keywords(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Insurance => &[
            "insurance",
            "policy",
            "claim",
            "coverage",
            "covered",
            "premium",
            "insurer",
            "deductible",
        ],
        Domain::Legal => &[
            "legal",
            "law",
            "lawsuit",
            "contract",
            "liability",
            "clause",
            "court",
            "attorney",
        ],
        Domain::Hr => &[
            "hr",
            "employee",
            "employer",
            "benefits",
            "leave",
            "payroll",
            "handbook",
            "tenure",
        ],
        Domain::Compliance => &[
            "compliance",
            "compliant",
            "regulation",
            "regulatory",
            "audit",
            "gdpr",
            "violation",
            "statute",
        ],
        Domain::General => &[],
    }
}

/// Classify a lowercased query into a domain.
pub(crate) fn classify(lower: &str) -> Domain {
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let mut best = Domain::General;
    let mut best_hits = 0usize;

    for domain in Domain::CLASSIFIABLE {
        let hits = words
            .iter()
            .filter(|w| keywords(domain).contains(*w))
            .count();
        // Strict comparison keeps the first-declared domain on ties.
        if hits > best_hits {
            best = domain;
            best_hits = hits;
        }
    }

    best
}
