//! Strongly typed positions and league formats.

pub mod league;
pub mod position;

pub use league::{FlexSlot, LeagueFormat, LeagueSettings, RosterRequirements};
pub use position::Position;
