//! Deterministic hashed bag-of-words provider.
//!
//! Buckets terms into a fixed-dimension vector with FNV-1a and weights
//! them sublinearly. Far weaker than a neural model, but it has no
//! external dependency, so it serves tests and air-gapped deployments.

use std::collections::HashMap;

use clausal_core::errors::ClausalResult;
use clausal_core::traits::IEmbeddingProvider;

pub struct HashedBowEmbedder {
    dimensions: usize,
}

impl HashedBowEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut counts: HashMap<String, f32> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_default() += 1.0;
        }

        for (term, count) in &counts {
            // Sublinear term weighting keeps repeated boilerplate terms
            // from dominating the vector.
            let weight = 1.0 + count.ln();
            vec[Self::bucket(term, self.dimensions)] += weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedBowEmbedder {
    fn embed(&self, text: &str) -> ClausalResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> ClausalResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-bow"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_configured_dimensions() {
        let p = HashedBowEmbedder::new(256);
        assert_eq!(p.embed("policy coverage terms").unwrap().len(), 256);
    }

    #[test]
    fn empty_text_is_a_zero_vector() {
        let p = HashedBowEmbedder::new(64);
        let v = p.embed("").unwrap();
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn non_empty_text_is_unit_norm() {
        let p = HashedBowEmbedder::new(128);
        let v = p.embed("knee surgery waiting period").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn deterministic_across_calls() {
        let p = HashedBowEmbedder::new(128);
        assert_eq!(p.embed("same input").unwrap(), p.embed("same input").unwrap());
    }

    #[test]
    fn related_texts_score_closer_than_unrelated() {
        let p = HashedBowEmbedder::new(256);
        let a = p.embed("knee surgery coverage policy").unwrap();
        let b = p.embed("knee surgery waiting policy").unwrap();
        let c = p.embed("quarterly revenue spreadsheet totals").unwrap();
        let dot = |x: &[f32], y: &[f32]| -> f32 { x.iter().zip(y).map(|(a, b)| a * b).sum() };
        assert!(dot(&a, &b) > dot(&a, &c));
    }

    #[test]
    fn batch_matches_individual_calls() {
        let p = HashedBowEmbedder::new(64);
        let texts = vec!["first chunk".to_string(), "second chunk".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, t) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(t).unwrap());
        }
    }
}
