use thiserror::Error;

use crate::types::{CategoryName, RecordId};

/// Error type for decoding, loader-row parsing, and resource construction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PrepError {
    #[error("record {record_id}: expected {expected} category fields, found {found}")]
    SchemaMismatch {
        record_id: RecordId,
        expected: usize,
        found: usize,
    },
    #[error("record {record_id}: category '{category}' has non-numeric value '{value}'")]
    MalformedCategory {
        record_id: RecordId,
        category: CategoryName,
        value: String,
    },
    #[error("input {index}: {reason}")]
    InvalidInput { index: usize, reason: String },
    #[error("input {index}: no tokens produced for a non-empty sentence")]
    EmptySentence { index: usize },
    #[error("linguistic resource failure: {0}")]
    Resource(String),
}
