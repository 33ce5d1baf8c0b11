//! Justification assembly: summary sentence, factor list, and verbatim
//! clause references.

use clausal_core::constants::{CLAUSE_REFERENCE_RULES, EXCERPT_RADIUS};
use clausal_core::models::{DecisionStatus, RetrievalResult};

use crate::rules::RuleFire;

/// Status-specific opening followed by one sentence per fired rule.
pub fn summary(status: DecisionStatus, fires: &[RuleFire]) -> String {
    let opening = match status {
        DecisionStatus::Approved => "The retrieved clauses support approving this request.",
        DecisionStatus::Rejected => {
            "The retrieved clauses indicate this request does not meet the applicable requirements."
        }
        DecisionStatus::Pending => {
            "The available evidence is not sufficient for a definitive outcome; further review is required."
        }
    };

    if fires.is_empty() {
        return opening.to_string();
    }

    let mut out = String::from(opening);
    for fire in fires {
        out.push(' ');
        out.push_str(&sentence(fire.message));
    }
    out
}

/// One factor string per fired rule, in evaluation order, signed so the
/// caller can see the direction of each contribution.
pub fn factors(fires: &[RuleFire]) -> Vec<String> {
    fires
        .iter()
        .map(|f| format!("{} ({:+.1})", f.message, f.contribution))
        .collect()
}

/// Verbatim excerpts behind the top-weighted fired rules.
///
/// Takes the `CLAUSE_REFERENCE_RULES` fires with the largest absolute
/// contribution that matched evidence text, locates each match in the
/// retrieved chunks, and returns excerpts ordered by retrieval rank.
pub fn clause_references(fires: &[RuleFire], retrieval: &RetrievalResult) -> Vec<String> {
    let mut weighted: Vec<&RuleFire> = fires.iter().filter(|f| f.matched.is_some()).collect();
    // Stable sort keeps evaluation order among equal magnitudes.
    weighted.sort_by(|a, b| {
        b.contribution
            .abs()
            .partial_cmp(&a.contribution.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    weighted.truncate(CLAUSE_REFERENCE_RULES);

    // Collect (rank, excerpt) so output follows retrieval rank order.
    let mut references: Vec<(usize, String)> = Vec::new();
    for fire in weighted {
        let needle = fire.matched.as_deref().unwrap_or_default();
        for hit in &retrieval.hits {
            if let Some(excerpt) = excerpt_around(&hit.chunk.text, needle) {
                if !references.iter().any(|(_, e)| e == &excerpt) {
                    references.push((hit.rank, excerpt));
                }
                break;
            }
        }
    }
    references.sort_by_key(|(rank, _)| *rank);
    references.into_iter().map(|(_, e)| e).collect()
}

/// Cut a char-boundary-safe window around the first case-insensitive
/// occurrence of `needle` in `text`.
fn excerpt_around(text: &str, needle: &str) -> Option<String> {
    if needle.is_empty() {
        return None;
    }
    let lower_text = text.to_lowercase();
    let lower_needle = needle.to_lowercase();
    let match_start = lower_text.find(&lower_needle)?;

    // Map the byte position in the lowered text to a char position;
    // lowercasing can change byte lengths, so count chars up to the
    // match in the lowered text and reuse that char offset in the
    // original. Char counts survive case mapping for the scripts we
    // handle.
    let match_char = lower_text[..match_start].chars().count();
    let needle_chars = lower_needle.chars().count();

    let chars: Vec<char> = text.chars().collect();
    let start = match_char.saturating_sub(EXCERPT_RADIUS);
    let end = (match_char + needle_chars + EXCERPT_RADIUS).min(chars.len());

    let mut excerpt: String = chars[start..end].iter().collect();
    let excerpt_trimmed = excerpt.trim().to_string();
    excerpt = excerpt_trimmed;
    if start > 0 {
        excerpt = format!("…{excerpt}");
    }
    if end < chars.len() {
        excerpt = format!("{excerpt}…");
    }
    Some(excerpt)
}

fn sentence(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
