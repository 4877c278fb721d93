//! Command implementations for the lineup CLI

pub mod common;
pub mod grade;
pub mod lineup;
pub mod report;

pub use grade::handle_grade;
pub use lineup::handle_lineup;
pub use report::{handle_league, handle_report};
