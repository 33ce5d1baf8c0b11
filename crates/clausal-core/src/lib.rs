//! # clausal-core
//!
//! Foundation crate for the clausal decision engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ClausalConfig;
pub use errors::{ClausalError, ClausalResult};
pub use models::{
    Chunk, Decision, DecisionStatus, Document, Domain, ParsedQuery, QueryField, RankedChunk,
    RetrievalMethod, RetrievalResult,
};
