//! ONNX Runtime embedding provider.
//!
//! Loads a sentence-embedding model via the `ort` crate (v2), runs
//! inference with hashed whitespace tokenization, mean-pools the output
//! tensor, and L2-normalizes so cosine similarity reduces to a dot
//! product.

use std::path::Path;
use std::sync::Mutex;

use clausal_core::errors::{ClausalResult, EmbeddingError};
use clausal_core::traits::IEmbeddingProvider;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

/// ONNX-backed embedding provider.
pub struct OnnxEmbedder {
    /// `Session::run` needs `&mut self`; the Mutex restores the `&self`
    /// contract of `IEmbeddingProvider`.
    session: Mutex<Session>,
    dimensions: usize,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxEmbedder {}

impl std::fmt::Debug for OnnxEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEmbedder")
            .field("dimensions", &self.dimensions)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OnnxEmbedder {
    /// Load an ONNX model from the given path.
    ///
    /// A missing file or unloadable model is the expected "capability
    /// absent" case — callers treat it as tier unavailability, not a
    /// fault.
    pub fn load(model_path: &str, dimensions: usize) -> ClausalResult<Self> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let session = Session::builder()
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .with_intra_threads(2)
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .commit_from_file(model_path)
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, dims = dimensions, "embedding model loaded");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            model_name,
        })
    }

    fn infer(&self, text: &str) -> ClausalResult<Vec<f32>> {
        let token_ids = Self::hash_tokenize(text);
        let seq_len = token_ids.len();

        let input_ids: Vec<i64> = token_ids.iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = vec![1i64; seq_len];

        let ids_tensor =
            Tensor::from_array((vec![1i64, seq_len as i64], input_ids)).map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("tensor creation error: {e}"),
                }
            })?;

        let mask_tensor =
            Tensor::from_array((vec![1i64, seq_len as i64], attention_mask)).map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("tensor creation error: {e}"),
                }
            })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs =
            session
                .run(ort::inputs![ids_tensor, mask_tensor])
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: e.to_string(),
                })?;

        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| EmbeddingError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        // Mean-pool the sequence dimension when the model returns
        // per-token states.
        let embedding = if shape.len() == 3 {
            // [batch=1, seq, dims]
            let seq = shape[1] as usize;
            let dims = shape[2] as usize;
            let mut pooled = vec![0.0f32; dims];
            for s in 0..seq {
                for d in 0..dims {
                    pooled[d] += data[s * dims + d];
                }
            }
            for v in &mut pooled {
                *v /= seq as f32;
            }
            pooled
        } else if shape.len() == 2 {
            // [batch=1, dims] — already pooled.
            let dims = shape[1] as usize;
            data[..dims].to_vec()
        } else {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("unexpected output shape: {shape:?}"),
            }
            .into());
        };

        let mut result = embedding;
        let norm: f32 = result.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut result {
                *v /= norm;
            }
        }

        result.resize(self.dimensions, 0.0);
        Ok(result)
    }

    /// Minimal tokenizer: split on non-word characters, hash each word
    /// into a bounded vocab range, add [CLS]/[SEP] markers.
    fn hash_tokenize(text: &str) -> Vec<u32> {
        if text.is_empty() {
            return vec![101, 102];
        }
        let mut ids = vec![101u32];
        for word in text.split(|c: char| !c.is_alphanumeric() && c != '_') {
            if word.is_empty() {
                continue;
            }
            let mut h: u32 = 0x811c9dc5;
            for b in word.to_lowercase().as_bytes() {
                h ^= *b as u32;
                h = h.wrapping_mul(0x01000193);
            }
            ids.push(1 + (h % 29999));
        }
        ids.push(102);
        ids
    }
}

impl IEmbeddingProvider for OnnxEmbedder {
    fn embed(&self, text: &str) -> ClausalResult<Vec<f32>> {
        self.infer(text)
    }

    fn embed_batch(&self, texts: &[String]) -> ClausalResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
