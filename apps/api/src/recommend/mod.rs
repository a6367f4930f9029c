//! Recommender — ranks catalog records against a (role, skills) query.
//!
//! The vector space is fitted once per catalog in `Recommender::new`; the
//! catalog never changes after startup, so every call sees the same space a
//! per-call refit would produce.

pub mod handlers;
pub mod stop_words;
pub mod tfidf;

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::assessment::RankedResult;
use crate::recommend::tfidf::TfidfIndex;

/// Rows returned per request. Not user-configurable.
pub const DEFAULT_TOP_N: usize = 5;

pub struct Recommender {
    catalog: Arc<Catalog>,
    index: TfidfIndex,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let documents: Vec<&str> = catalog
            .records()
            .iter()
            .map(|r| r.combined_text.as_str())
            .collect();
        let index = TfidfIndex::fit(&documents);
        debug!(
            "Fitted TF-IDF space: {} documents, {} terms",
            index.document_count(),
            index.vocabulary_len()
        );
        Self { catalog, index }
    }

    /// Top `top_n` records by cosine similarity, highest first. Ties keep
    /// catalog order. A non-blank `difficulty` then filters the top rows
    /// case-insensitively, so fewer than `top_n` rows may come back.
    pub fn recommend(
        &self,
        job_title: &str,
        skills: &str,
        difficulty: &str,
        top_n: usize,
    ) -> Vec<RankedResult> {
        if self.catalog.is_empty() || top_n == 0 {
            return Vec::new();
        }

        let query = format!("{job_title} {skills}");
        let scores = self.index.similarities(&query);

        let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(top_n);

        let difficulty = difficulty.trim().to_lowercase();
        ranked
            .into_iter()
            .filter_map(|(i, score)| self.catalog.get(i).map(|record| (record, score)))
            .filter(|(record, _)| {
                difficulty.is_empty() || record.difficulty.to_lowercase() == difficulty
            })
            .map(|(record, score)| RankedResult::from_record(record, score))
            .collect()
    }
}
