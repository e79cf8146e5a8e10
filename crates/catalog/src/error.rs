//! Error types for the catalog crate.
//!
//! Loading the snapshot is the only fallible step in the whole system;
//! every error here is surfaced once to the caller and never retried.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and validating a catalog snapshot
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog file is not a JSON array of entry records
    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record had an invalid value
    ///
    /// `position` is the zero-based index of the record in the file.
    #[error("Invalid value for {field} in record {position}: {reason}")]
    InvalidValue {
        field: String,
        position: usize,
        reason: String,
    },

    /// Two records share the same id
    #[error("Duplicate entry id {id} (records {first} and {second})")]
    DuplicateId { id: u64, first: usize, second: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
