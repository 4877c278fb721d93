//! League format presets and the roster requirements they resolve to.

use super::position::Position;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Named league format preset.
///
/// Parsing never fails: unrecognized names resolve to [`LeagueFormat::Standard`].
///
/// # Examples
///
/// ```rust
/// use ffl_lineup::LeagueFormat;
///
/// assert_eq!(LeagueFormat::from_name("SuperFlex"), LeagueFormat::Superflex);
/// assert_eq!(LeagueFormat::from_name("bogus"), LeagueFormat::Standard);
/// assert_eq!(LeagueFormat::TwoQb.requirements().total_starters(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum LeagueFormat {
    #[default]
    Standard,
    Superflex,
    TwoQb,
    TwoFlex,
}

impl LeagueFormat {
    pub const ALL: [LeagueFormat; 4] = [
        LeagueFormat::Standard,
        LeagueFormat::Superflex,
        LeagueFormat::TwoQb,
        LeagueFormat::TwoFlex,
    ];

    /// Resolve a format name, falling back to `Standard` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "" | "standard" => LeagueFormat::Standard,
            "superflex" | "super-flex" | "sf" => LeagueFormat::Superflex,
            "2qb" | "two-qb" | "twoqb" => LeagueFormat::TwoQb,
            "2flex" | "2-flex" | "two-flex" | "twoflex" => LeagueFormat::TwoFlex,
            other => {
                debug!(league_type = other, "unknown league type, using standard");
                LeagueFormat::Standard
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LeagueFormat::Standard => "standard",
            LeagueFormat::Superflex => "superflex",
            LeagueFormat::TwoQb => "2qb",
            LeagueFormat::TwoFlex => "2flex",
        }
    }

    /// Starting-lineup requirements for this preset.
    pub fn requirements(&self) -> RosterRequirements {
        let mut positions = BTreeMap::from([
            (Position::QB, 1),
            (Position::RB, 2),
            (Position::WR, 2),
            (Position::TE, 1),
            (Position::K, 1),
            (Position::DEF, 1),
        ]);
        let mut flex = FlexSlot::flex(1);
        let mut superflex = None;

        match self {
            LeagueFormat::Standard => {}
            LeagueFormat::Superflex => superflex = Some(FlexSlot::superflex(1)),
            LeagueFormat::TwoQb => {
                positions.insert(Position::QB, 2);
            }
            LeagueFormat::TwoFlex => flex = FlexSlot::flex(2),
        }

        RosterRequirements {
            positions,
            flex,
            superflex,
        }
    }
}

impl From<String> for LeagueFormat {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl FromStr for LeagueFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for LeagueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for LeagueFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A lineup slot that any of several positions may fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexSlot {
    pub count: usize,
    /// Eligible positions, in the order candidates are pooled.
    pub eligible_positions: Vec<Position>,
}

impl FlexSlot {
    /// RB/WR/TE flex slot.
    pub fn flex(count: usize) -> Self {
        Self {
            count,
            eligible_positions: vec![Position::RB, Position::WR, Position::TE],
        }
    }

    /// QB/RB/WR/TE superflex slot.
    pub fn superflex(count: usize) -> Self {
        Self {
            count,
            eligible_positions: vec![Position::QB, Position::RB, Position::WR, Position::TE],
        }
    }
}

/// Per-slot starter counts for one league format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRequirements {
    /// Fixed position slots. Iteration order is slot-filling order.
    pub positions: BTreeMap<Position, usize>,
    pub flex: FlexSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superflex: Option<FlexSlot>,
}

impl RosterRequirements {
    pub fn total_starters(&self) -> usize {
        self.positions.values().sum::<usize>()
            + self.flex.count
            + self.superflex.as_ref().map_or(0, |s| s.count)
    }
}

/// Settings the optimizer and grader are invoked with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSettings {
    #[serde(default)]
    pub league_type: LeagueFormat,
}

impl LeagueSettings {
    pub fn new(league_type: LeagueFormat) -> Self {
        Self { league_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(LeagueFormat::from_name("standard"), LeagueFormat::Standard);
        assert_eq!(LeagueFormat::from_name("SUPERFLEX"), LeagueFormat::Superflex);
        assert_eq!(LeagueFormat::from_name("2qb"), LeagueFormat::TwoQb);
        assert_eq!(LeagueFormat::from_name("two-qb"), LeagueFormat::TwoQb);
        assert_eq!(LeagueFormat::from_name("2flex"), LeagueFormat::TwoFlex);
        assert_eq!(LeagueFormat::from_name(" 2-Flex "), LeagueFormat::TwoFlex);
    }

    #[test]
    fn test_unknown_and_empty_names_fall_back_to_standard() {
        assert_eq!(LeagueFormat::from_name("bogus"), LeagueFormat::Standard);
        assert_eq!(LeagueFormat::from_name(""), LeagueFormat::Standard);
        assert_eq!("dynasty".parse::<LeagueFormat>().unwrap(), LeagueFormat::Standard);
    }

    #[test]
    fn test_name_round_trips_through_from_name() {
        for format in LeagueFormat::ALL {
            assert_eq!(LeagueFormat::from_name(format.name()), format);
        }
    }

    #[test]
    fn test_standard_requirements() {
        let req = LeagueFormat::Standard.requirements();

        assert_eq!(req.positions[&Position::QB], 1);
        assert_eq!(req.positions[&Position::RB], 2);
        assert_eq!(req.positions[&Position::WR], 2);
        assert_eq!(req.positions[&Position::TE], 1);
        assert_eq!(req.positions[&Position::K], 1);
        assert_eq!(req.positions[&Position::DEF], 1);
        assert_eq!(req.flex, FlexSlot::flex(1));
        assert!(req.superflex.is_none());
        assert_eq!(req.total_starters(), 9);
    }

    #[test]
    fn test_preset_differences() {
        let superflex = LeagueFormat::Superflex.requirements();
        assert_eq!(superflex.superflex, Some(FlexSlot::superflex(1)));
        assert_eq!(superflex.total_starters(), 10);

        let two_qb = LeagueFormat::TwoQb.requirements();
        assert_eq!(two_qb.positions[&Position::QB], 2);
        assert!(two_qb.superflex.is_none());
        assert_eq!(two_qb.total_starters(), 10);

        let two_flex = LeagueFormat::TwoFlex.requirements();
        assert_eq!(two_flex.flex.count, 2);
        assert_eq!(two_flex.total_starters(), 10);
    }

    #[test]
    fn test_fixed_slots_iterate_in_filling_order() {
        let req = LeagueFormat::Standard.requirements();
        let order: Vec<Position> = req.positions.keys().copied().collect();
        assert_eq!(order, Position::ALL.to_vec());
    }

    #[test]
    fn test_league_settings_deserialization_is_permissive() {
        let settings: LeagueSettings =
            serde_json::from_str(r#"{"leagueType": "superflex"}"#).unwrap();
        assert_eq!(settings.league_type, LeagueFormat::Superflex);

        let settings: LeagueSettings = serde_json::from_str(r#"{"leagueType": "bogus"}"#).unwrap();
        assert_eq!(settings.league_type, LeagueFormat::Standard);

        let settings: LeagueSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, LeagueSettings::default());
    }

    #[test]
    fn test_requirements_serialize_with_string_keys() {
        let value = serde_json::to_value(LeagueFormat::Superflex.requirements()).unwrap();
        assert_eq!(value["positions"]["RB"], 2);
        assert_eq!(value["flex"]["eligiblePositions"][0], "RB");
        assert_eq!(value["superflex"]["count"], 1);
    }
}
