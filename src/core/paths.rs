//! Data directory and data file path resolution.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{error::LineupError, Result, DATA_DIR_ENV_VAR};

pub const DEFAULT_ROSTER_FILE: &str = "roster.json";
pub const DEFAULT_VORP_FILE: &str = "vorp.json";
pub const DEFAULT_LEAGUE_FILE: &str = "league.json";

/// Path: <platform data dir>/ffl-lineup
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join("ffl-lineup"))
}

/// Resolve the data directory from the CLI flag, then `FFL_LINEUP_DATA_DIR`,
/// then the platform default.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    data_dir
        .or_else(|| {
            std::env::var_os(DATA_DIR_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or_else(default_data_dir)
        .ok_or_else(|| LineupError::MissingDataDir {
            env_var: DATA_DIR_ENV_VAR.to_string(),
        })
}

/// An explicitly given file wins; otherwise `default_name` inside `data_dir`.
pub fn resolve_data_file(explicit: Option<PathBuf>, data_dir: &Path, default_name: &str) -> PathBuf {
    explicit.unwrap_or_else(|| data_dir.join(default_name))
}

/// Read a whole file, keeping the path in the error.
pub fn read_to_string(path: &Path) -> Result<String> {
    let mut s = String::new();
    fs::File::open(path)
        .and_then(|mut f| f.read_to_string(&mut s))
        .map_err(|source| LineupError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(s)
}
