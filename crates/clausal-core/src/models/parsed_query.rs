use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A structured field the query parser can extract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QueryField {
    Age,
    Gender,
    Procedure,
    Location,
    PolicyDuration,
    Amount,
}

impl QueryField {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryField::Age => "age",
            QueryField::Gender => "gender",
            QueryField::Procedure => "procedure",
            QueryField::Location => "location",
            QueryField::PolicyDuration => "policy_duration",
            QueryField::Amount => "amount",
        }
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed domain classification driving rule-table selection.
///
/// Declaration order is the tie-break order when keyword hit counts are
/// equal. `General` is the zero-hit default and is never scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Insurance,
    Legal,
    Hr,
    Compliance,
    #[default]
    General,
}

impl Domain {
    /// Domains the classifier scores, in tie-break order.
    pub const CLASSIFIABLE: [Domain; 4] = [
        Domain::Insurance,
        Domain::Legal,
        Domain::Hr,
        Domain::Compliance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Insurance => "insurance",
            Domain::Legal => "legal",
            Domain::Hr => "hr",
            Domain::Compliance => "compliance",
            Domain::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structured form of a free-text query.
///
/// Created once per request, immutable thereafter. Only fields that
/// matched an extraction rule are present; an absent field is not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// The original query text, untouched.
    pub text: String,
    /// Extracted field values, keyed uniquely by field.
    pub fields: BTreeMap<QueryField, String>,
    pub domain: Domain,
}

impl ParsedQuery {
    pub fn field(&self, field: QueryField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: QueryField) -> bool {
        self.fields.contains_key(&field)
    }

    /// The extracted age as a number, if present and numeric.
    pub fn age(&self) -> Option<u32> {
        self.field(QueryField::Age)?.parse().ok()
    }

    /// The extracted policy duration converted to months.
    ///
    /// Accepts the extractor's `"N months"` / `"N years"` rendering.
    pub fn policy_months(&self) -> Option<u32> {
        let raw = self.field(QueryField::PolicyDuration)?;
        let mut parts = raw.split_whitespace();
        let n: u32 = parts.next()?.parse().ok()?;
        let unit = parts.next()?;
        if unit.starts_with("year") {
            Some(n * 12)
        } else {
            Some(n)
        }
    }
}
