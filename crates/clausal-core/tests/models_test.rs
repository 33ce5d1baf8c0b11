//! Serialization and invariant tests for the core value objects.

use std::collections::BTreeMap;

use clausal_core::models::{
    Chunk, Decision, DecisionStatus, Document, Domain, ParsedQuery, QueryField, RankedChunk,
    RetrievalMethod, RetrievalResult,
};
use clausal_core::models::{ConfidenceLevel, RiskLevel};

fn sample_query() -> ParsedQuery {
    let mut fields = BTreeMap::new();
    fields.insert(QueryField::Age, "46".to_string());
    fields.insert(QueryField::Procedure, "knee surgery".to_string());
    ParsedQuery {
        text: "46-year-old, knee surgery".to_string(),
        fields,
        domain: Domain::Insurance,
    }
}

#[test]
fn parsed_query_round_trips_through_json() {
    let query = sample_query();
    let json = serde_json::to_string(&query).unwrap();
    let back: ParsedQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(query, back);
}

#[test]
fn parsed_query_field_keys_serialize_snake_case() {
    let json = serde_json::to_string(&sample_query()).unwrap();
    assert!(json.contains("\"procedure\""));
    assert!(json.contains("\"insurance\""));
}

#[test]
fn retrieval_result_round_trips_through_json() {
    let result = RetrievalResult {
        method: RetrievalMethod::Lexical,
        hits: vec![RankedChunk {
            chunk: Chunk {
                text: "knee surgery is covered".to_string(),
                start: 0,
                end: 23,
                index: 0,
            },
            score: 0.42,
            rank: 0,
        }],
        fallbacks: Vec::new(),
    };
    let json = serde_json::to_string(&result).unwrap();
    let back: RetrievalResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn document_id_tracks_content() {
    let a = Document::new("some policy".to_string(), vec![]);
    let b = Document::new("some policy".to_string(), vec![]);
    let c = Document::new("another policy".to_string(), vec![]);
    assert_eq!(a.id, b.id);
    assert_ne!(a.id, c.id);
}

#[test]
fn decision_equality_is_structural() {
    let make = || Decision {
        status: DecisionStatus::Pending,
        confidence: ConfidenceLevel::Low,
        risk: RiskLevel::High,
        summary: "insufficient evidence".to_string(),
        factors: vec![],
        clause_references: vec![],
    };
    assert_eq!(make(), make());
}
