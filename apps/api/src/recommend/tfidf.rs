//! TF-IDF vector space over a fixed set of documents.
//!
//! - Tokens: lowercased runs of alphabetic characters, length ≥ 2, stop words removed.
//! - Term weight: raw count × smoothed idf, `ln((1 + n) / (1 + df)) + 1`.
//! - Every vector is L2-normalised, so a dot product is the cosine similarity.
//!
//! Vectors are stored sparse as `(term_index, weight)` pairs sorted by index.

use std::collections::BTreeMap;

use crate::recommend::stop_words::is_stop_word;

type SparseVector = Vec<(usize, f64)>;

pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|run| run.chars().count() >= 2)
        .map(|run| run.to_lowercase())
        .filter(|token| !is_stop_word(token))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct TfidfIndex {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    doc_vectors: Vec<SparseVector>,
}

impl TfidfIndex {
    /// Learns the vocabulary and idf weights from `documents` and stores their vectors.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut vocabulary = BTreeMap::new();
        for tokens in &tokenized {
            for token in tokens {
                vocabulary.entry(token.clone()).or_insert(0);
            }
        }
        // Indices follow alphabetical order.
        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let mut seen: Vec<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            seen.sort_unstable();
            seen.dedup();
            for index in seen {
                document_frequency[index] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            doc_vectors: Vec::new(),
        };
        index.doc_vectors = tokenized.iter().map(|t| index.vectorize(t)).collect();
        index
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn document_count(&self) -> usize {
        self.doc_vectors.len()
    }

    #[cfg(test)]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }

    /// Projects `text` into the fitted space. Unknown terms are dropped.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&tokenize(text))
    }

    /// Cosine similarity of `query` against every fitted document, in document order.
    pub fn similarities(&self, query: &str) -> Vec<f64> {
        let query_vector = self.transform(query);
        self.doc_vectors
            .iter()
            .map(|doc| dot(&query_vector, doc).clamp(0.0, 1.0))
            .collect()
    }

    fn vectorize(&self, tokens: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in vector.iter_mut() {
                *weight /= norm;
            }
        }
        vector
    }
}

/// Dot product of two index-sorted sparse vectors.
fn dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j, mut sum) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
