//! Fantasy football position types and utilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
///
/// Only the six rosterable positions are represented. Flexible lineup slots
/// (FLEX, SUPERFLEX) are modelled separately by [`crate::lineup::LineupSlot`]
/// because a player never *has* a flex position, only fills one.
///
/// Variant order is the order fixed lineup slots are filled in.
///
/// # Examples
///
/// ```rust
/// use ffl_lineup::Position;
///
/// assert_eq!("wr".parse::<Position>().unwrap(), Position::WR);
/// assert_eq!(Position::normalize(" d/st "), Some(Position::DEF));
/// assert_eq!(Position::normalize(""), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Every rosterable position, in slot-filling order.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];

    /// Resolve a raw position string, returning `None` for empty or
    /// unrecognized values instead of an error.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(format!("Unrecognized player position: {s:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parsing_is_case_insensitive() {
        assert_eq!("qb".parse::<Position>().unwrap(), Position::QB);
        assert_eq!("Rb".parse::<Position>().unwrap(), Position::RB);
        assert_eq!("WR".parse::<Position>().unwrap(), Position::WR);
        assert_eq!("te".parse::<Position>().unwrap(), Position::TE);
        assert_eq!("k".parse::<Position>().unwrap(), Position::K);
        assert_eq!("def".parse::<Position>().unwrap(), Position::DEF);

        // Defense aliases
        assert_eq!("D/ST".parse::<Position>().unwrap(), Position::DEF);
        assert_eq!("dst".parse::<Position>().unwrap(), Position::DEF);

        assert!("FLEX".parse::<Position>().is_err());
        assert!("LB".parse::<Position>().is_err());
    }

    #[test]
    fn test_normalize_drops_empty_and_unknown() {
        assert_eq!(Position::normalize("  te "), Some(Position::TE));
        assert_eq!(Position::normalize(""), None);
        assert_eq!(Position::normalize("   "), None);
        assert_eq!(Position::normalize("P"), None);
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::DEF.to_string(), "DEF");

        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_position_order_matches_slot_order() {
        let mut shuffled = vec![Position::DEF, Position::QB, Position::K, Position::WR];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Position::QB, Position::WR, Position::K, Position::DEF]
        );
    }
}
