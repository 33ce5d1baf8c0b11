//! # clausal-ingest
//!
//! Turns extracted plain text into an immutable [`Document`]:
//! normalize → chunk into overlapping fixed-size windows → stamp a
//! content id.
//!
//! [`Document`]: clausal_core::models::Document

pub mod chunker;
pub mod normalize;
pub mod processor;

pub use processor::DocumentProcessor;
