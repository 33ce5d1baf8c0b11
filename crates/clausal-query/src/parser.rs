//! The query parser facade.

use clausal_core::models::{ParsedQuery, QueryField};
use tracing::debug;

use crate::domain;
use crate::fields::FieldRules;

/// Parses natural-language queries into structured [`ParsedQuery`]
/// values.
///
/// All patterns compile once at construction; `parse` is a pure
/// function of its input.
pub struct QueryParser {
    rules: FieldRules,
}

impl QueryParser {
    pub fn new() -> Self {
        Self {
            rules: FieldRules::new(),
        }
    }

    /// Extract structured fields and classify the domain.
    ///
    /// Fields without a matching rule are absent from the result —
    /// that is an expected outcome, not an error.
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let trimmed = query.trim();
        let lower = trimmed.to_lowercase();
        let fields = self.rules.extract(trimmed, &lower);
        let domain = domain::classify(&lower);
        debug!(
            fields = fields.len(),
            domain = %domain,
            "query parsed"
        );
        ParsedQuery {
            text: trimmed.to_string(),
            fields,
            domain,
        }
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable restatement of the extracted fields, used by the
/// response assembler to echo what the system understood.
pub fn summarize(parsed: &ParsedQuery) -> String {
    let mut parts: Vec<String> = Vec::new();

    match (parsed.field(QueryField::Age), parsed.field(QueryField::Gender)) {
        (Some(age), Some(gender)) => parts.push(format!("{age}-year-old {gender}")),
        (Some(age), None) => parts.push(format!("{age} years old")),
        (None, Some(gender)) => parts.push(gender.to_string()),
        (None, None) => {}
    }

    if let Some(procedure) = parsed.field(QueryField::Procedure) {
        parts.push(format!("requiring {procedure}"));
    }
    if let Some(location) = parsed.field(QueryField::Location) {
        parts.push(format!("in {location}"));
    }
    if let Some(duration) = parsed.field(QueryField::PolicyDuration) {
        parts.push(format!("with a {duration} policy"));
    }
    if let Some(amount) = parsed.field(QueryField::Amount) {
        parts.push(format!("claiming {amount}"));
    }

    if parts.is_empty() {
        "query with no extractable fields".to_string()
    } else {
        parts.join(", ")
    }
}
