//! Core utilities for the lineup CLI
//!
//! - `paths`: data directory resolution and file reading

pub mod paths;

// Re-export commonly used items for convenience
pub use paths::{read_to_string, resolve_data_dir, resolve_data_file};
