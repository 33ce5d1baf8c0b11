//! # clausal-pipeline
//!
//! The facade collaborating layers call: text in, evidence-cited
//! decision out. Wires the chunker, query parser, tiered retrieval
//! engine, and decision synthesizer together and assembles the
//! response contract.

pub mod pipeline;
pub mod response;

pub use pipeline::AnalysisPipeline;
