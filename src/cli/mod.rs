//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::LeagueFormat;

/// Arguments shared by every command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Data directory holding default files (or set `FFL_LINEUP_DATA_DIR`).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// League format: standard | superflex | 2qb | 2flex. Unknown names fall back to standard.
    #[clap(long, short = 't', default_value_t = LeagueFormat::Standard)]
    pub league_type: LeagueFormat,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pick the optimal starting lineup for a roster and list the bench.
    Lineup {
        #[clap(flatten)]
        common: CommonArgs,

        /// Roster file (.json or .csv). Defaults to `roster.json` in the data directory.
        #[clap(long, short)]
        roster: Option<PathBuf>,
    },

    /// Grade each position group of a roster against VORP data.
    Grade {
        #[clap(flatten)]
        common: CommonArgs,

        /// Roster file (.json or .csv). Defaults to `roster.json` in the data directory.
        #[clap(long, short)]
        roster: Option<PathBuf>,

        /// VORP file (.json or .csv). Defaults to `vorp.json` in the data directory.
        #[clap(long)]
        vorp: Option<PathBuf>,
    },

    /// Full team report: lineup, bench, requirements and grades.
    Report {
        #[clap(flatten)]
        common: CommonArgs,

        /// Roster file (.json or .csv). Defaults to `roster.json` in the data directory.
        #[clap(long, short)]
        roster: Option<PathBuf>,

        /// VORP file (.json or .csv). Defaults to `vorp.json` in the data directory.
        #[clap(long)]
        vorp: Option<PathBuf>,

        /// Team name shown in the report.
        #[clap(long, short = 'n')]
        team_name: Option<String>,
    },

    /// Report and rank every team in a league file.
    League {
        #[clap(flatten)]
        common: CommonArgs,

        /// League file (.json). Defaults to `league.json` in the data directory.
        #[clap(long, short)]
        league: Option<PathBuf>,

        /// VORP file (.json or .csv). Defaults to `vorp.json` in the data directory.
        #[clap(long)]
        vorp: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-lineup",
    about = "Fantasy football lineup optimizer and roster grader"
)]
pub struct FflLineup {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lineup_command() {
        let app = FflLineup::try_parse_from([
            "ffl-lineup",
            "lineup",
            "--roster",
            "team.csv",
            "-t",
            "superflex",
            "--json",
        ])
        .unwrap();

        match app.command {
            Commands::Lineup { common, roster } => {
                assert_eq!(roster, Some(PathBuf::from("team.csv")));
                assert_eq!(common.league_type, LeagueFormat::Superflex);
                assert!(common.json);
                assert!(common.data_dir.is_none());
            }
            other => panic!("Expected Lineup command, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_league_type_parses_as_standard() {
        let app =
            FflLineup::try_parse_from(["ffl-lineup", "grade", "--league-type", "keeper"]).unwrap();

        match app.command {
            Commands::Grade { common, .. } => {
                assert_eq!(common.league_type, LeagueFormat::Standard)
            }
            other => panic!("Expected Grade command, got {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let app = FflLineup::try_parse_from(["ffl-lineup", "league", "-v"]).unwrap();
        assert!(app.verbose);
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        FflLineup::command().debug_assert();
    }
}
