//! Ordered field extraction rules.
//!
//! Each field owns an ordered list of alternative patterns; the first
//! rule that matches wins and later rules are never consulted. The rule
//! order below is the documented precedence — there is no scoring
//! across rules.

use std::collections::BTreeMap;

use clausal_core::constants::MAX_PLAUSIBLE_AGE;
use clausal_core::models::QueryField;
use regex::Regex;

/// Body parts and specialties recognized by the procedure extractor.
const BODY_PARTS: &str = "knee|hip|heart|brain|liver|kidney|lung|spine|shoulder|ankle|wrist|back|neck|eye|dental|cardiac|orthopedic|neurological|cosmetic";

/// Procedure nouns recognized by the procedure extractor.
const PROCEDURE_WORDS: &str =
    "surgery|procedure|operation|treatment|repair|replacement|implant|transplant|biopsy";

/// Capitalized words that look like locations but never are.
const LOCATION_STOPLIST: &[&str] = &[
    "old", "year", "month", "policy", "insurance", "male", "female", "hospital", "clinic",
];

/// Compiled extraction rules for every field.
pub(crate) struct FieldRules {
    age: Vec<Regex>,
    gender_named: Regex,
    gender_shorthand: Regex,
    procedure_part_first: Regex,
    procedure_prepositional: Regex,
    procedure_bare: Regex,
    location_prepositional: Regex,
    location_facility: Regex,
    duration: Vec<Regex>,
    amount_symbol: Regex,
    amount_word: Regex,
}

impl FieldRules {
    pub(crate) fn new() -> Self {
        Self {
            age: vec![
                Regex::new(r"\b(\d{1,3})\s*-?\s*(?:year|yr)s?\s*-?\s*old\b").unwrap(),
                Regex::new(r"\b(\d{1,3})[mf]\b").unwrap(),
                Regex::new(r"\bage\s*:?\s*(\d{1,3})\b").unwrap(),
                Regex::new(r"\b(\d{1,3})\s+(?:male|female|man|woman)\b").unwrap(),
            ],
            gender_named: Regex::new(r"\b(male|female|man|woman)\b").unwrap(),
            gender_shorthand: Regex::new(r"\b\d{1,3}(m|f)\b").unwrap(),
            procedure_part_first: Regex::new(&format!(
                r"\b({BODY_PARTS})\s+({PROCEDURE_WORDS})\b"
            ))
            .unwrap(),
            procedure_prepositional: Regex::new(&format!(
                r"\b({PROCEDURE_WORDS})\s+(?:for|on|of)\s+(?:the\s+)?([a-z]+)"
            ))
            .unwrap(),
            procedure_bare: Regex::new(&format!(r"\b({PROCEDURE_WORDS})\b")).unwrap(),
            location_prepositional: Regex::new(
                r"\b(?:in|at|from|near)\s+([A-Z][a-zA-Z]*(?:\s+[A-Z][a-zA-Z]*)*)",
            )
            .unwrap(),
            location_facility: Regex::new(
                r"\b([A-Z][a-zA-Z]+)\s+(?:Hospital|Clinic|Center|Medical)\b",
            )
            .unwrap(),
            duration: vec![
                Regex::new(
                    r"\b(\d+)\s*-?\s*(month|mo|year|yr)s?\s*-?\s*(?:old\s+)?(?:insurance\s+)?policy\b",
                )
                .unwrap(),
                Regex::new(r"\bpolicy\s+(?:of\s+|for\s+)?(\d+)\s*(month|year)s?\b").unwrap(),
                Regex::new(r"\b(\d+)\s*(month|year)s?\s*(?:old|existing|active)\b").unwrap(),
            ],
            amount_symbol: Regex::new(r"[$₹€£]\s*\d[\d,]*(?:\.\d{1,2})?").unwrap(),
            amount_word: Regex::new(r"\b\d[\d,]*\s*(?:dollars|rupees|euros|pounds|inr|usd)\b")
                .unwrap(),
        }
    }

    /// Run every field extractor against the query.
    ///
    /// `lower` must be the lowercased form of `original`; location and
    /// amount work on the original casing, everything else on the
    /// lowered form.
    pub(crate) fn extract(&self, original: &str, lower: &str) -> BTreeMap<QueryField, String> {
        let mut fields = BTreeMap::new();
        if let Some(v) = self.extract_age(lower) {
            fields.insert(QueryField::Age, v);
        }
        if let Some(v) = self.extract_gender(lower) {
            fields.insert(QueryField::Gender, v);
        }
        if let Some(v) = self.extract_procedure(lower) {
            fields.insert(QueryField::Procedure, v);
        }
        if let Some(v) = self.extract_location(original) {
            fields.insert(QueryField::Location, v);
        }
        if let Some(v) = self.extract_duration(lower) {
            fields.insert(QueryField::PolicyDuration, v);
        }
        if let Some(v) = self.extract_amount(original) {
            fields.insert(QueryField::Amount, v);
        }
        fields
    }

    fn extract_age(&self, lower: &str) -> Option<String> {
        for rule in &self.age {
            if let Some(caps) = rule.captures(lower) {
                let age: u32 = caps[1].parse().ok()?;
                if age <= MAX_PLAUSIBLE_AGE {
                    return Some(age.to_string());
                }
            }
        }
        None
    }

    fn extract_gender(&self, lower: &str) -> Option<String> {
        if let Some(caps) = self.gender_named.captures(lower) {
            return Some(match &caps[1] {
                "male" | "man" => "male".to_string(),
                _ => "female".to_string(),
            });
        }
        if let Some(caps) = self.gender_shorthand.captures(lower) {
            return Some(match &caps[1] {
                "m" => "male".to_string(),
                _ => "female".to_string(),
            });
        }
        None
    }

    fn extract_procedure(&self, lower: &str) -> Option<String> {
        if let Some(caps) = self.procedure_part_first.captures(lower) {
            return Some(format!("{} {}", &caps[1], &caps[2]));
        }
        if let Some(caps) = self.procedure_prepositional.captures(lower) {
            return Some(format!("{} {}", &caps[2], &caps[1]));
        }
        if let Some(caps) = self.procedure_bare.captures(lower) {
            return Some(caps[1].to_string());
        }
        None
    }

    fn extract_location(&self, original: &str) -> Option<String> {
        for rule in [&self.location_prepositional, &self.location_facility] {
            if let Some(caps) = rule.captures(original) {
                let candidate = caps[1].trim().to_string();
                if !LOCATION_STOPLIST.contains(&candidate.to_lowercase().as_str()) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn extract_duration(&self, lower: &str) -> Option<String> {
        for rule in &self.duration {
            if let Some(caps) = rule.captures(lower) {
                let n: u32 = caps[1].parse().ok()?;
                let unit = if caps[2].starts_with("year") || caps[2].starts_with("yr") {
                    "year"
                } else {
                    "month"
                };
                return Some(if n == 1 {
                    format!("{n} {unit}")
                } else {
                    format!("{n} {unit}s")
                });
            }
        }
        None
    }

    fn extract_amount(&self, original: &str) -> Option<String> {
        for rule in [&self.amount_symbol, &self.amount_word] {
            if let Some(m) = rule.find(original) {
                return Some(m.as_str().trim().to_string());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(query: &str) -> BTreeMap<QueryField, String> {
        FieldRules::new().extract(query, &query.to_lowercase())
    }

    #[test]
    fn age_shorthand_with_gender_letter() {
        let fields = extract("46M, cardiac surgery, Pune");
        assert_eq!(fields[&QueryField::Age], "46");
        assert_eq!(fields[&QueryField::Gender], "male");
    }

    #[test]
    fn implausible_age_is_discarded() {
        let fields = extract("460-year-old applicant");
        assert!(!fields.contains_key(&QueryField::Age));
    }

    #[test]
    fn prepositional_procedure_is_reordered() {
        let fields = extract("requesting surgery for knee in Delhi");
        assert_eq!(fields[&QueryField::Procedure], "knee surgery");
    }

    #[test]
    fn bare_procedure_word_matches_last() {
        let fields = extract("is the treatment reimbursable");
        assert_eq!(fields[&QueryField::Procedure], "treatment");
    }

    #[test]
    fn location_stoplist_filters_false_positives() {
        let fields = extract("claim from Male applicant");
        assert!(!fields.contains_key(&QueryField::Location));
    }

    #[test]
    fn facility_location_rule() {
        let fields = extract("admitted to Fortis Hospital yesterday");
        assert_eq!(fields[&QueryField::Location], "Fortis");
    }

    #[test]
    fn duration_pluralizes_correctly() {
        let fields = extract("1-month policy");
        assert_eq!(fields[&QueryField::PolicyDuration], "1 month");
        let fields = extract("2-year policy");
        assert_eq!(fields[&QueryField::PolicyDuration], "2 years");
    }

    #[test]
    fn amount_with_currency_symbol() {
        let fields = extract("claim of ₹ 150,000 submitted");
        assert_eq!(fields[&QueryField::Amount], "₹ 150,000");
    }

    #[test]
    fn amount_with_currency_word() {
        let fields = extract("claim of 5000 dollars submitted");
        assert_eq!(fields[&QueryField::Amount], "5000 dollars");
    }

    #[test]
    fn unmatched_fields_are_absent() {
        let fields = extract("is this covered");
        assert!(!fields.contains_key(&QueryField::Age));
        assert!(!fields.contains_key(&QueryField::Location));
    }
}
