//! Error types for lineage-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineageError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Revision conflict on {id}: expected {expected}, found {actual}")]
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error("Malformed version: {0}")]
    Version(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
