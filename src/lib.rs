//! Fantasy Football Lineup Optimizer & Roster Grader
//!
//! Picks the best starting lineup for a roster under a league format and
//! grades each position group against value-over-replacement (VORP) data.
//!
//! ## Features
//!
//! - **Lineup Optimization**: Fill fixed position slots, then FLEX/SUPERFLEX, by projected points
//! - **Bench Derivation**: Everyone not starting, in roster order
//! - **Position Grading**: Blend VORP and projections into per-position letter grades
//! - **League Reports**: Grade and rank every team of a league in parallel
//! - **Lenient Loading**: JSON and CSV roster/VORP files with forgiving field parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use ffl_lineup::{
//!     grading::{PositionGrader, VorpEntry},
//!     lineup::{LineupOptimizer, LineupSlot},
//!     roster::{Player, Team},
//!     LeagueFormat, LeagueSettings, Position,
//! };
//!
//! let roster = vec![
//!     Player::new("Breece Hall", Position::RB, 260.0),
//!     Player::new("Kenneth Walker", Position::RB, 210.0),
//!     Player::new("Rachaad White", Position::RB, 200.0),
//! ];
//! let settings = LeagueSettings::new(LeagueFormat::Standard);
//!
//! let optimizer = LineupOptimizer::new();
//! let lineup = optimizer.calculate_optimal_lineup(&roster, &settings);
//! assert_eq!(lineup.get(LineupSlot::RB).unwrap().len(), 2);
//! assert_eq!(lineup.get(LineupSlot::FLEX).unwrap()[0].display_name(), "Rachaad White");
//! assert!(optimizer.get_bench_players(&roster, &lineup).is_empty());
//!
//! let grader = PositionGrader::new(&[VorpEntry::new("Breece Hall", 60.0)]);
//! let grades = grader.calculate_position_grades(&Team::new("Mine", roster), &settings);
//! assert_eq!(grades.recommendations.len(), 1);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a directory holding `roster.json`, `vorp.json` and
//! `league.json` so file flags can be omitted:
//! ```bash
//! export FFL_LINEUP_DATA_DIR=~/ffl-data
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod data;
pub mod error;
pub mod grading;
pub mod lineup;
pub mod report;
pub mod roster;

// Re-export commonly used types
pub use cli::types::{LeagueFormat, LeagueSettings, Position, RosterRequirements};
pub use error::{LineupError, Result};

pub const DATA_DIR_ENV_VAR: &str = "FFL_LINEUP_DATA_DIR";
