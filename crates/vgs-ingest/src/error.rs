//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the sales dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Broken CSV framing (bad quoting, invalid UTF-8, I/O during parse).
    #[error("failed to parse CSV {input}: {source}")]
    Csv {
        input: String,
        #[source]
        source: csv::Error,
    },

    /// A required header is absent.
    #[error("required column '{column}' not found in {input}")]
    MissingColumn { column: &'static str, input: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
