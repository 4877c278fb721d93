//! Common utilities and helper functions shared across commands.

use std::path::PathBuf;
use tracing::info;

use crate::{
    cli::{types::LeagueSettings, CommonArgs},
    core::{
        paths::{DEFAULT_LEAGUE_FILE, DEFAULT_ROSTER_FILE, DEFAULT_VORP_FILE},
        resolve_data_dir, resolve_data_file,
    },
    data::{load_roster, load_teams, load_vorp},
    grading::{PositionGrade, PositionGrader},
    lineup::OptimalLineup,
    roster::{Player, Team},
    Result,
};

/// Resolved data directory and league settings for one invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub data_dir: PathBuf,
    pub settings: LeagueSettings,
    pub as_json: bool,
}

impl CommandContext {
    pub fn new(common: CommonArgs) -> Result<Self> {
        let data_dir = resolve_data_dir(common.data_dir)?;

        Ok(Self {
            data_dir,
            settings: LeagueSettings::new(common.league_type),
            as_json: common.json,
        })
    }

    pub fn load_team(&self, roster: Option<PathBuf>, team_name: Option<String>) -> Result<Team> {
        let path = resolve_data_file(roster, &self.data_dir, DEFAULT_ROSTER_FILE);
        let roster = load_roster(&path)?;
        info!(path = %path.display(), players = roster.len(), "roster loaded");

        let name = team_name.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("team")
                .to_string()
        });
        Ok(Team::new(&name, roster))
    }

    pub fn load_league(&self, league: Option<PathBuf>) -> Result<Vec<Team>> {
        let path = resolve_data_file(league, &self.data_dir, DEFAULT_LEAGUE_FILE);
        let teams = load_teams(&path)?;
        info!(path = %path.display(), teams = teams.len(), "league loaded");
        Ok(teams)
    }

    pub fn load_grader(&self, vorp: Option<PathBuf>) -> Result<PositionGrader> {
        let path = resolve_data_file(vorp, &self.data_dir, DEFAULT_VORP_FILE);
        let entries = load_vorp(&path)?;
        let grader = PositionGrader::new(&entries);
        info!(path = %path.display(), players = grader.len(), "VORP lookup built");
        Ok(grader)
    }
}

/// One aligned text line for a player.
pub fn format_player_line(label: &str, player: &Player) -> String {
    format!(
        "  {:<10} {:<28} {:>8.2}",
        label,
        player.display_name(),
        player.projected_points
    )
}

pub fn print_lineup(lineup: &OptimalLineup) {
    for (slot, players) in lineup.iter() {
        if players.is_empty() {
            println!("  {:<10} (empty)", slot.to_string());
        }
        for player in players {
            println!("{}", format_player_line(&slot.to_string(), player));
        }
    }
}

pub fn print_bench(bench: &[Player]) {
    if bench.is_empty() {
        println!("  (none)");
    }
    for player in bench {
        let label = player
            .position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}", format_player_line(&label, player));
    }
}

pub fn print_position_grades(grades: &[PositionGrade]) {
    for g in grades {
        println!(
            "  {:<4} {:<3} score {:>7.2}  {:>8.2} pts  ({} players)",
            g.position.to_string(),
            g.grade.to_string(),
            g.score,
            g.projected_points,
            g.player_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{LeagueFormat, Position};

    #[test]
    fn test_format_player_line() {
        let line = format_player_line("QB", &Player::new("Josh Allen", Position::QB, 380.0));
        assert!(line.starts_with("  QB"));
        assert!(line.contains("Josh Allen"));
        assert!(line.ends_with("380.00"));
    }

    #[test]
    fn test_command_context_loads_default_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("roster.json"),
            r#"[{"playerName": "A", "position": "QB", "projectedPoints": 1}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("vorp.json"),
            r#"[{"playerName": "A", "vorpScore": 5}]"#,
        )
        .unwrap();

        let ctx = CommandContext::new(CommonArgs {
            data_dir: Some(dir.path().to_path_buf()),
            league_type: LeagueFormat::TwoQb,
            json: true,
        })
        .unwrap();
        assert_eq!(ctx.settings.league_type, LeagueFormat::TwoQb);
        assert!(ctx.as_json);

        let team = ctx.load_team(None, None).unwrap();
        assert_eq!(team.name, "roster");
        assert_eq!(team.roster.len(), 1);

        let grader = ctx.load_grader(None).unwrap();
        assert_eq!(grader.vorp_for("a"), 5.0);

        assert!(ctx.load_league(None).is_err());
    }
}
