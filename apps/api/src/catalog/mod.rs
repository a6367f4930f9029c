//! Catalog Store: the fixed table of assessment products.
//!
//! Loaded once by the process entry point and shared read-only through
//! `AppState`. There is no partial-catalog mode: any read or parse failure
//! aborts the load.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::assessment::{AssessmentRecord, CatalogRow};

/// Columns the CSV header must carry. Order in the file does not matter.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "product_name",
    "product_url",
    "job_roles",
    "skills_assessed",
    "difficulty",
    "duration",
    "test_type",
    "remote_testing",
    "irt_supported",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to open catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),
}

/// Immutable, in-memory assessment catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<AssessmentRecord>,
}

impl Catalog {
    /// Reads every row of the CSV file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        info!("Loading assessment catalog from {}", path.display());

        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;

        info!("Assessment catalog loaded: {} records", catalog.len());
        Ok(catalog)
    }

    /// Parses CSV content from any reader. The first line must be a header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(CatalogError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let mut row = row?;
            // Missing trailing cells read as empty strings.
            while row.len() < headers.len() {
                row.push_field("");
            }
            let row: CatalogRow = row.deserialize(Some(&headers))?;
            records.push(AssessmentRecord::from(row));
        }

        Ok(Self { records })
    }

    #[cfg(test)]
    pub fn from_records(records: Vec<AssessmentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AssessmentRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&AssessmentRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
