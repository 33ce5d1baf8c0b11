//! Embedding provider implementations.

mod hashed;
mod onnx;

pub use hashed::HashedBowEmbedder;
pub use onnx::OnnxEmbedder;
