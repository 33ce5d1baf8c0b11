//! # clausal-decision
//!
//! Synthesizes a [`Decision`] from a parsed query and retrieved
//! evidence. Each domain carries a declarative table of weighted rules;
//! one interpreter evaluates them, sums the signed contributions, and
//! classifies the total against configurable thresholds. Deterministic
//! by construction: identical inputs always produce identical output.
//!
//! [`Decision`]: clausal_core::models::Decision

pub mod advisory;
pub mod justification;
pub mod llm;
pub mod risk;
pub mod rules;
pub mod synthesizer;

pub use synthesizer::DecisionSynthesizer;
