//! Domain-synonym query expansion.
//!
//! The lexical tier vectorizes an expanded form of the query so that a
//! question about a "knee" can still match a clause written in terms of
//! "orthopedic" procedures. The table is fixed and small; expansion
//! appends related terms without removing anything from the query.

use std::collections::HashMap;

use clausal_core::constants::MAX_QUERY_EXPANSIONS;

/// Domain synonym map: query term → related terms worth matching on.
fn synonym_map() -> HashMap<&'static str, &'static [&'static str]> {
    let mut m = HashMap::new();
    m.insert("knee", &["patella", "orthopedic", "joint"][..]);
    m.insert("hip", &["orthopedic", "joint", "arthroplasty"]);
    m.insert("heart", &["cardiac", "cardiovascular", "bypass"]);
    m.insert("brain", &["neurological", "neurosurgery", "cranial"]);
    m.insert("spine", &["spinal", "orthopedic", "vertebral"]);
    m.insert("eye", &["ophthalmic", "vision", "cataract"]);
    m.insert("dental", &["tooth", "oral", "orthodontic"]);
    m.insert("surgery", &["procedure", "operation", "surgical"]);
    m.insert("treatment", &["therapy", "care", "procedure"]);
    m.insert("policy", &["coverage", "plan", "benefits"]);
    m.insert("claim", &["reimbursement", "settlement", "payout"]);
    m.insert("premium", &["payment", "installment"]);
    m.insert("employee", &["staff", "personnel", "worker"]);
    m.insert("leave", &["absence", "vacation", "sabbatical"]);
    m.insert("contract", &["agreement", "terms"]);
    m.insert("month", &["months", "duration", "period"]);
    m.insert("year", &["years", "duration", "period"]);
    m
}

/// Expand a query with domain synonyms.
///
/// Returns the query unchanged when nothing in the table applies.
/// Expansion is capped so a term-heavy query cannot balloon.
pub fn expand(query: &str) -> String {
    let map = synonym_map();
    let words: Vec<&str> = query.split_whitespace().collect();
    let mut expansions: Vec<&str> = Vec::new();

    for word in &words {
        let lower = word.to_lowercase();
        if let Some(synonyms) = map.get(lower.as_str()) {
            for syn in *synonyms {
                if !words.iter().any(|w| w.eq_ignore_ascii_case(syn))
                    && !expansions.contains(syn)
                {
                    expansions.push(syn);
                }
            }
        }
    }

    if expansions.is_empty() {
        return query.to_string();
    }

    expansions.truncate(MAX_QUERY_EXPANSIONS);
    format!("{} {}", query, expansions.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knee_expands_to_orthopedic_terms() {
        let expanded = expand("knee surgery in mumbai");
        assert!(expanded.starts_with("knee surgery in mumbai"));
        assert!(expanded.contains("patella"));
        assert!(expanded.contains("orthopedic"));
    }

    #[test]
    fn unknown_terms_pass_through_unchanged() {
        assert_eq!(expand("quarterly revenue report"), "quarterly revenue report");
    }

    #[test]
    fn expansion_never_duplicates_query_words() {
        let expanded = expand("orthopedic knee replacement");
        let count = expanded
            .split_whitespace()
            .filter(|w| w.eq_ignore_ascii_case("orthopedic"))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn expansion_is_capped() {
        let expanded = expand("knee hip heart brain spine eye dental surgery policy claim");
        let original_words = 10;
        let total = expanded.split_whitespace().count();
        assert!(total <= original_words + MAX_QUERY_EXPANSIONS);
    }

    #[test]
    fn empty_query_stays_empty() {
        assert_eq!(expand(""), "");
    }
}
