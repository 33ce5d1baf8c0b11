//! Per-document TF-IDF vector space.
//!
//! Fitted over one document's chunks — never globally — with a
//! unigram+bigram vocabulary, smoothed idf, sublinear tf, and
//! L2-normalized sparse vectors so cosine similarity is a sparse dot
//! product.

use std::collections::HashMap;

/// A TF-IDF space fitted to one document.
pub struct TfIdfSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    chunk_vectors: Vec<HashMap<usize, f64>>,
}

impl TfIdfSpace {
    /// Fit the space over the document's chunk texts.
    ///
    /// Returns `None` when no chunk yields a single term — the lexical
    /// tier treats that as unavailability.
    pub fn fit(chunk_texts: &[String]) -> Option<Self> {
        let tokenized: Vec<Vec<String>> = chunk_texts.iter().map(|t| terms(t)).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for chunk_terms in &tokenized {
            let mut seen: Vec<&str> = Vec::new();
            for term in chunk_terms {
                if !vocabulary.contains_key(term) {
                    vocabulary.insert(term.clone(), vocabulary.len());
                    document_frequency.push(0);
                }
                if !seen.contains(&term.as_str()) {
                    seen.push(term);
                    document_frequency[vocabulary[term]] += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return None;
        }

        let n = chunk_texts.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
            .collect();

        let mut space = Self {
            vocabulary,
            idf,
            chunk_vectors: Vec::new(),
        };
        let chunk_vectors: Vec<HashMap<usize, f64>> = tokenized
            .iter()
            .map(|chunk_terms| space.weigh(chunk_terms))
            .collect();
        space.chunk_vectors = chunk_vectors;
        Some(space)
    }

    /// Vectorize arbitrary text in the fitted space. Terms outside the
    /// vocabulary are ignored.
    pub fn vectorize(&self, text: &str) -> HashMap<usize, f64> {
        self.weigh(&terms(text))
    }

    /// Cosine similarity of the query vector against every chunk, in
    /// chunk order.
    pub fn score(&self, query: &HashMap<usize, f64>) -> Vec<(usize, f64)> {
        self.chunk_vectors
            .iter()
            .enumerate()
            .map(|(i, chunk)| (i, sparse_dot(query, chunk)))
            .collect()
    }

    /// Sublinear tf × idf, L2-normalized.
    fn weigh(&self, chunk_terms: &[String]) -> HashMap<usize, f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in chunk_terms {
            if let Some(&col) = self.vocabulary.get(term) {
                *counts.entry(col).or_default() += 1.0;
            }
        }

        let mut vector: HashMap<usize, f64> = counts
            .into_iter()
            .map(|(col, count)| (col, (1.0 + count.ln()) * self.idf[col]))
            .collect();

        let norm: f64 = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            for w in vector.values_mut() {
                *w /= norm;
            }
        }
        vector
    }
}

/// Lowercased unigrams and bigrams of alphanumeric words.
fn terms(text: &str) -> Vec<String> {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= 2)
        .map(str::to_lowercase)
        .collect();

    let mut terms = words.clone();
    for pair in words.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

fn sparse_dot(a: &HashMap<usize, f64>, b: &HashMap<usize, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(col, w)| large.get(col).map(|v| w * v))
        .sum()
}
