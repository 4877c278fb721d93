//! Combined lineup + grade reports for one team or a whole league.

use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use crate::{
    cli::types::{LeagueFormat, LeagueSettings},
    grading::{PositionGrader, TeamGrade},
    lineup::{LineupAnalysis, LineupOptimizer, OptimalLineup},
    roster::{Player, Team},
};


/// Everything known about one team: who starts, who sits, and how it grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport {
    pub team_name: String,
    pub league_type: LeagueFormat,
    pub optimal_lineup: OptimalLineup,
    pub bench: Vec<Player>,
    pub starter_points: f64,
    pub bench_points: f64,
    pub analysis: LineupAnalysis,
    pub grades: TeamGrade,
}

impl TeamReport {
    pub fn build(team: &Team, settings: &LeagueSettings, grader: &PositionGrader) -> Self {
        let optimizer = LineupOptimizer::new();
        let optimal_lineup = optimizer.calculate_optimal_lineup(&team.roster, settings);
        let bench = optimizer.get_bench_players(&team.roster, &optimal_lineup);
        let analysis = optimizer.analyze_lineup(&optimal_lineup, settings);
        let grades = grader.calculate_position_grades(team, settings);

        debug!(
            team = %team.name,
            starters = optimal_lineup.starter_count(),
            bench = bench.len(),
            overall = %grades.overall_grade,
            "built team report"
        );

        Self {
            team_name: team.name.clone(),
            league_type: settings.league_type,
            starter_points: optimizer.calculate_total_projected_points(&optimal_lineup),
            bench_points: optimizer.calculate_total_projected_points(&bench),
            optimal_lineup,
            bench,
            analysis,
            grades,
        }
    }
}

/// Team reports ranked best overall grade first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueReport {
    pub league_type: LeagueFormat,
    pub teams: Vec<TeamReport>,
}

impl LeagueReport {
    /// Build every team's report in parallel, then rank by overall score.
    /// Equal scores keep input order.
    pub fn build(teams: &[Team], settings: &LeagueSettings, grader: &PositionGrader) -> Self {
        let mut reports: Vec<TeamReport> = teams
            .par_iter()
            .map(|team| TeamReport::build(team, settings, grader))
            .collect();

        reports.sort_by(|a, b| {
            b.grades
                .overall_score
                .partial_cmp(&a.grades.overall_score)
                .unwrap_or(Ordering::Equal)
        });

        Self {
            league_type: settings.league_type,
            teams: reports,
        }
    }
}
