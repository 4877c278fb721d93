//! Starting-lineup selection and bench derivation.
//!
//! Fixed position slots are filled first, in slot order, with the highest
//! projected players of that position. Flex-type slots then draw from
//! whatever eligible players remain. A player is used at most once.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::{debug, trace};

use crate::{
    cli::types::{FlexSlot, LeagueFormat, LeagueSettings, Position, RosterRequirements},
    roster::{Player, PositionGroups},
};


/// A starting-lineup slot. Variant order is the order slots are filled in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LineupSlot {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    FLEX,
    SUPERFLEX,
}

impl From<Position> for LineupSlot {
    fn from(pos: Position) -> Self {
        match pos {
            Position::QB => LineupSlot::QB,
            Position::RB => LineupSlot::RB,
            Position::WR => LineupSlot::WR,
            Position::TE => LineupSlot::TE,
            Position::K => LineupSlot::K,
            Position::DEF => LineupSlot::DEF,
        }
    }
}

impl fmt::Display for LineupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineupSlot::QB => "QB",
            LineupSlot::RB => "RB",
            LineupSlot::WR => "WR",
            LineupSlot::TE => "TE",
            LineupSlot::K => "K",
            LineupSlot::DEF => "DEF",
            LineupSlot::FLEX => "FLEX",
            LineupSlot::SUPERFLEX => "SUPERFLEX",
        };
        write!(f, "{}", s)
    }
}

/// Slot → selected players.
///
/// Fixed position slots are always present, possibly empty. FLEX and
/// SUPERFLEX are present only when at least one player filled them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptimalLineup {
    slots: BTreeMap<LineupSlot, Vec<Player>>,
}

impl OptimalLineup {
    pub fn get(&self, slot: LineupSlot) -> Option<&[Player]> {
        self.slots.get(&slot).map(Vec::as_slice)
    }

    pub fn contains_slot(&self, slot: LineupSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LineupSlot, &[Player])> {
        self.slots.iter().map(|(slot, players)| (*slot, players.as_slice()))
    }

    /// Every starter, in slot order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.slots.values().flatten()
    }

    pub fn starter_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    fn insert(&mut self, slot: LineupSlot, players: Vec<Player>) {
        self.slots.insert(slot, players);
    }
}

/// Anything whose projected points can be summed: a flat player list or a
/// slot mapping.
pub trait ProjectedTotal {
    fn total_projected_points(&self) -> f64;
}

impl ProjectedTotal for [Player] {
    fn total_projected_points(&self) -> f64 {
        self.iter().map(|p| p.projected_points).sum()
    }
}

impl ProjectedTotal for Vec<Player> {
    fn total_projected_points(&self) -> f64 {
        self.as_slice().total_projected_points()
    }
}

impl ProjectedTotal for OptimalLineup {
    fn total_projected_points(&self) -> f64 {
        self.players().map(|p| p.projected_points).sum()
    }
}

/// Requirement summary for a league format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupAnalysis {
    pub total_starters: usize,
    pub league_type: LeagueFormat,
    pub requirements: RosterRequirements,
    pub position_requirements: BTreeMap<Position, usize>,
}

/// Stateless lineup optimizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineupOptimizer;

impl LineupOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Pick the starting lineup for `roster` under the league's requirements.
    ///
    /// Never fails. An empty roster yields every fixed slot present and empty.
    pub fn calculate_optimal_lineup(
        &self,
        roster: &[Player],
        settings: &LeagueSettings,
    ) -> OptimalLineup {
        let requirements = settings.league_type.requirements();
        let groups = PositionGroups::from_roster(roster);
        let mut used: HashSet<&str> = HashSet::new();
        let mut lineup = OptimalLineup::default();

        for (&pos, &count) in &requirements.positions {
            let mut candidates: Vec<&Player> = groups
                .get(pos)
                .iter()
                .copied()
                .filter(|p| !used.contains(p.key()))
                .collect();
            sort_by_projection(&mut candidates);
            candidates.truncate(count);

            for &p in &candidates {
                trace!(slot = %pos, player = p.display_name(), points = p.projected_points, "filled slot");
                used.insert(p.key());
            }
            lineup.insert(pos.into(), candidates.into_iter().cloned().collect());
        }

        fill_flex_slot(
            &mut lineup,
            LineupSlot::FLEX,
            &requirements.flex,
            &groups,
            &mut used,
        );

        if let Some(superflex) = &requirements.superflex {
            fill_flex_slot(
                &mut lineup,
                LineupSlot::SUPERFLEX,
                superflex,
                &groups,
                &mut used,
            );
        }

        lineup
    }

    /// Roster players not in any lineup slot, in roster order.
    pub fn get_bench_players(&self, roster: &[Player], optimal_lineup: &OptimalLineup) -> Vec<Player> {
        let starters: HashSet<&str> = optimal_lineup.players().map(Player::key).collect();

        roster
            .iter()
            .filter(|p| !starters.contains(p.key()))
            .cloned()
            .collect()
    }

    pub fn calculate_total_projected_points<P: ProjectedTotal + ?Sized>(&self, players: &P) -> f64 {
        players.total_projected_points()
    }

    /// Summarize the league's lineup requirements.
    ///
    /// Only `settings` is consulted; the lineup's contents are not inspected.
    pub fn analyze_lineup(
        &self,
        _optimal_lineup: &OptimalLineup,
        settings: &LeagueSettings,
    ) -> LineupAnalysis {
        let requirements = settings.league_type.requirements();

        LineupAnalysis {
            total_starters: requirements.total_starters(),
            league_type: settings.league_type,
            position_requirements: requirements.positions.clone(),
            requirements,
        }
    }
}

/// Fill up to `flex.count` picks from the unused eligible players, taking the
/// best remaining candidate each time. Ties go to the first candidate pooled.
fn fill_flex_slot<'a>(
    lineup: &mut OptimalLineup,
    slot: LineupSlot,
    flex: &FlexSlot,
    groups: &PositionGroups<'a>,
    used: &mut HashSet<&'a str>,
) {
    let pool: Vec<&'a Player> = flex
        .eligible_positions
        .iter()
        .flat_map(|&pos| groups.get(pos).iter().copied())
        .filter(|p| !used.contains(p.key()))
        .collect();

    let mut picked = Vec::new();
    for _ in 0..flex.count {
        let best = pool
            .iter()
            .copied()
            .filter(|p| !used.contains(p.key()))
            .fold(None, |best: Option<&'a Player>, p| match best {
                Some(b) if b.projected_points >= p.projected_points => Some(b),
                _ => Some(p),
            });

        let Some(best) = best else {
            break;
        };
        trace!(slot = %slot, player = best.display_name(), points = best.projected_points, "filled slot");
        used.insert(best.key());
        picked.push(best.clone());
    }

    if picked.is_empty() {
        debug!(slot = %slot, "no eligible players left, slot omitted");
    } else {
        lineup.insert(slot, picked);
    }
}

/// Stable sort, highest projection first.
fn sort_by_projection(players: &mut [&Player]) {
    players.sort_by(|a, b| {
        b.projected_points
            .partial_cmp(&a.projected_points)
            .unwrap_or(Ordering::Equal)
    });
}
