//! Grade command implementation

use std::path::PathBuf;

use super::common::{print_position_grades, CommandContext};
use crate::{cli::CommonArgs, Result};

/// Handle the grade command
pub fn handle_grade(common: CommonArgs, roster: Option<PathBuf>, vorp: Option<PathBuf>) -> Result<()> {
    let ctx = CommandContext::new(common)?;
    let team = ctx.load_team(roster, None)?;
    let grader = ctx.load_grader(vorp)?;

    let grades = grader.calculate_position_grades(&team, &ctx.settings);

    if ctx.as_json {
        println!("{}", serde_json::to_string_pretty(&grades)?); // tarpaulin::skip
    } else {
        // tarpaulin::skip - console output
        println!(
            "Overall: {} ({:.2})",
            grades.overall_grade, grades.overall_score
        );
        print_position_grades(&grades.position_grades);
        for rec in &grades.recommendations {
            println!("  ! {}", rec.message);
        }
    }

    Ok(())
}
