//! Error types for the lineup optimizer CLI
//!
//! The optimizer and grader never fail; these errors only come from loading
//! roster and VORP files and from resolving the data directory.

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Unsupported data file type (expected .json or .csv): {path}")]
    UnsupportedFileType { path: PathBuf },

    #[error("Data directory not provided, {env_var} not set and no platform data directory found")]
    MissingDataDir { env_var: String },
}
