//! # clausal-query
//!
//! Turns a free-text question into a [`ParsedQuery`]: ordered
//! pattern-based field extractors (first match wins) plus a
//! keyword-count domain classifier. Pure functions of their input — no
//! side effects, and an unmatched field is simply absent.
//!
//! [`ParsedQuery`]: clausal_core::models::ParsedQuery

mod domain;
mod fields;
mod parser;

pub use parser::{summarize, QueryParser};
