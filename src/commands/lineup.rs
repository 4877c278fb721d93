//! Lineup command implementation

use serde::Serialize;
use std::path::PathBuf;

use super::common::{print_bench, print_lineup, CommandContext};
use crate::{
    cli::CommonArgs,
    lineup::{LineupOptimizer, OptimalLineup},
    roster::Player,
    Result,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LineupOutput {
    optimal_lineup: OptimalLineup,
    bench: Vec<Player>,
    starter_points: f64,
}

/// Handle the lineup command
pub fn handle_lineup(common: CommonArgs, roster: Option<PathBuf>) -> Result<()> {
    let ctx = CommandContext::new(common)?;
    let team = ctx.load_team(roster, None)?;

    let optimizer = LineupOptimizer::new();
    let optimal_lineup = optimizer.calculate_optimal_lineup(&team.roster, &ctx.settings);
    let bench = optimizer.get_bench_players(&team.roster, &optimal_lineup);
    let starter_points = optimizer.calculate_total_projected_points(&optimal_lineup);

    if ctx.as_json {
        let output = LineupOutput {
            optimal_lineup,
            bench,
            starter_points,
        };
        println!("{}", serde_json::to_string_pretty(&output)?); // tarpaulin::skip
    } else {
        // tarpaulin::skip - console output
        println!("Optimal lineup ({})", ctx.settings.league_type);
        print_lineup(&optimal_lineup);
        println!(
            "  {} starters, {:.2} projected points",
            optimal_lineup.starter_count(),
            starter_points
        );
        println!("Bench");
        print_bench(&bench);
    }

    Ok(())
}
