//! Roster, league and VORP file loaders.
//!
//! JSON and CSV are supported, chosen by file extension. Records are parsed
//! leniently (see [`crate::roster::de`]); a CSV row that cannot be read at all
//! is logged and skipped.

use serde::{de::DeserializeOwned, Deserialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::{
    core::read_to_string,
    error::LineupError,
    grading::VorpEntry,
    roster::{Player, Team},
    Result,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Csv,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(DataFormat::Json),
            Some("csv") => Ok(DataFormat::Csv),
            _ => Err(LineupError::UnsupportedFileType {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// A roster file is either a bare player array or `{ "roster": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterFile {
    Players(Vec<Player>),
    Wrapped { roster: Vec<Player> },
}

/// A league file is either a bare team array or `{ "teams": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LeagueFile {
    Teams(Vec<Team>),
    Wrapped { teams: Vec<Team> },
}

/// VORP data is either a bare entry array or `{ "players": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum VorpFile {
    Entries(Vec<VorpEntry>),
    Wrapped { players: Vec<VorpEntry> },
}

pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let roster = match DataFormat::from_path(path)? {
        DataFormat::Json => match serde_json::from_str::<RosterFile>(&read_to_string(path)?)? {
            RosterFile::Players(players) | RosterFile::Wrapped { roster: players } => players,
        },
        DataFormat::Csv => load_csv(path)?,
    };

    debug!(path = %path.display(), players = roster.len(), "loaded roster");
    Ok(roster)
}

/// Teams are JSON only.
pub fn load_teams(path: &Path) -> Result<Vec<Team>> {
    if DataFormat::from_path(path)? != DataFormat::Json {
        return Err(LineupError::UnsupportedFileType {
            path: path.to_path_buf(),
        });
    }

    let teams = match serde_json::from_str::<LeagueFile>(&read_to_string(path)?)? {
        LeagueFile::Teams(teams) | LeagueFile::Wrapped { teams } => teams,
    };

    debug!(path = %path.display(), teams = teams.len(), "loaded league");
    Ok(teams)
}

pub fn load_vorp(path: &Path) -> Result<Vec<VorpEntry>> {
    let entries = match DataFormat::from_path(path)? {
        DataFormat::Json => match serde_json::from_str::<VorpFile>(&read_to_string(path)?)? {
            VorpFile::Entries(entries) | VorpFile::Wrapped { players: entries } => entries,
        },
        DataFormat::Csv => load_csv(path)?,
    };

    debug!(path = %path.display(), entries = entries.len(), "loaded VORP data");
    Ok(entries)
}

fn load_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = std::fs::File::open(path).map_err(|source| LineupError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    records_from_csv_reader(file).map_err(|source| LineupError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize CSV rows with a header line. Unreadable rows are skipped.
pub fn records_from_csv_reader<T: DeserializeOwned, R: Read>(
    rdr: R,
) -> std::result::Result<Vec<T>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    // Fail on an unreadable header rather than returning nothing
    reader.headers()?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!(row = row + 1, error = %e, "skipping unreadable CSV row"),
        }
    }
    Ok(records)
}
