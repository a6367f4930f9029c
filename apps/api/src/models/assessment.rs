use serde::{Deserialize, Serialize};

/// One row of the assessment catalog as it appears in the CSV source.
/// Empty or missing cells deserialize to empty strings; columns beyond these are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRow {
    pub product_name: String,
    pub product_url: String,
    pub job_roles: String,
    pub skills_assessed: String,
    pub difficulty: String,
    pub duration: String,
    pub test_type: String,
    pub remote_testing: String,
    pub irt_supported: String,
}

/// A catalog record with its derived searchable text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentRecord {
    pub product_name: String,
    pub product_url: String,
    pub job_roles: String,
    pub skills_assessed: String,
    pub difficulty: String,
    /// Minutes, or free text; kept verbatim.
    pub duration: String,
    pub test_type: String,
    pub remote_testing: String,
    pub irt_supported: String,
    /// `job_roles + " " + skills_assessed`. Always present.
    pub combined_text: String,
}

impl From<CatalogRow> for AssessmentRecord {
    fn from(row: CatalogRow) -> Self {
        let combined_text = format!("{} {}", row.job_roles, row.skills_assessed);
        Self {
            product_name: row.product_name,
            product_url: row.product_url,
            job_roles: row.job_roles,
            skills_assessed: row.skills_assessed,
            difficulty: row.difficulty,
            duration: row.duration,
            test_type: row.test_type,
            remote_testing: row.remote_testing,
            irt_supported: row.irt_supported,
            combined_text,
        }
    }
}

/// One catalog record scored against a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub product_name: String,
    pub product_url: String,
    pub remote_testing: String,
    pub irt_supported: String,
    pub duration: String,
    pub test_type: String,
    /// Cosine similarity to the query, 0.0 – 1.0
    pub similarity: f64,
}

impl RankedResult {
    pub fn from_record(record: &AssessmentRecord, similarity: f64) -> Self {
        Self {
            product_name: record.product_name.clone(),
            product_url: record.product_url.clone(),
            remote_testing: record.remote_testing.clone(),
            irt_supported: record.irt_supported.clone(),
            duration: record.duration.clone(),
            test_type: record.test_type.clone(),
            similarity,
        }
    }
}
