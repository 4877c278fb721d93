//! Player and team records, plus grouping of a roster by position.

pub mod de;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::types::Position;


/// One rostered player.
///
/// All fields are optional on the wire. Missing or malformed values resolve
/// to neutral defaults: no id, no name, no position, zero points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub player_id: Option<String>,

    #[serde(
        default,
        alias = "name",
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub player_name: Option<String>,

    /// `None` when the source position was empty or unrecognized.
    #[serde(default, deserialize_with = "de::lenient_position")]
    pub position: Option<Position>,

    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub projected_points: f64,
}

impl Player {
    pub fn new(name: &str, position: Position, projected_points: f64) -> Self {
        Self {
            player_id: None,
            player_name: Some(name.to_string()),
            position: Some(position),
            projected_points,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.player_id = Some(id.to_string());
        self
    }

    /// Identity key within a roster: the id when present, else the name.
    ///
    /// Players carrying neither share the empty key.
    pub fn key(&self) -> &str {
        self.player_id
            .as_deref()
            .or(self.player_name.as_deref())
            .unwrap_or("")
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.player_name
            .as_deref()
            .or(self.player_id.as_deref())
            .unwrap_or("Unknown")
    }
}

/// A fantasy team and its roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, alias = "teamName")]
    pub name: String,
    #[serde(default)]
    pub roster: Vec<Player>,
}

impl Team {
    pub fn new(name: &str, roster: Vec<Player>) -> Self {
        Self {
            name: name.to_string(),
            roster,
        }
    }
}

/// Roster players grouped by position.
///
/// Groups appear in the order their position first occurs in the roster and
/// each group keeps roster order. Players without a position are left out.
#[derive(Debug, Clone, Default)]
pub struct PositionGroups<'a> {
    groups: Vec<(Position, Vec<&'a Player>)>,
}

impl<'a> PositionGroups<'a> {
    pub fn from_roster(roster: &'a [Player]) -> Self {
        let mut groups: Vec<(Position, Vec<&'a Player>)> = Vec::new();

        for player in roster {
            let Some(pos) = player.position else {
                debug!(player = player.display_name(), "no position, skipping grouping");
                continue;
            };
            match groups.iter_mut().find(|(p, _)| *p == pos) {
                Some((_, members)) => members.push(player),
                None => groups.push((pos, vec![player])),
            }
        }

        Self { groups }
    }

    /// Players at `pos`, empty when the roster has none.
    pub fn get(&self, pos: Position) -> &[&'a Player] {
        self.groups
            .iter()
            .find(|(p, _)| *p == pos)
            .map(|(_, members)| members.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &[&'a Player])> {
        self.groups.iter().map(|(p, members)| (*p, members.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
