//! Position-group grading against a value-over-replacement lookup.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::{
    cli::types::{LeagueSettings, Position},
    roster::{de, PositionGroups, Team},
};


/// Weight of summed VORP in a position score.
pub const VORP_WEIGHT: f64 = 0.6;
/// Weight of summed projected points in a position score.
pub const PROJECTION_WEIGHT: f64 = 0.02;

/// Letter grade. Variants are declared worst to best so `Ord` follows quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    F,
    D,
    CMinus,
    C,
    CPlus,
    BMinus,
    B,
    BPlus,
    AMinus,
    A,
    APlus,
}

impl Grade {
    /// Map a score to a grade using the first threshold it meets.
    pub fn from_score(score: f64) -> Self {
        const THRESHOLDS: [(f64, Grade); 10] = [
            (95.0, Grade::APlus),
            (90.0, Grade::A),
            (80.0, Grade::AMinus),
            (70.0, Grade::BPlus),
            (60.0, Grade::B),
            (50.0, Grade::BMinus),
            (40.0, Grade::CPlus),
            (30.0, Grade::C),
            (20.0, Grade::CMinus),
            (10.0, Grade::D),
        ];

        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of VORP input data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VorpEntry {
    #[serde(default, alias = "name", deserialize_with = "de::lenient_string")]
    pub player_name: Option<String>,
    #[serde(default, alias = "vorp_score", deserialize_with = "de::lenient_f64")]
    pub vorp_score: f64,
}

impl VorpEntry {
    pub fn new(player_name: &str, vorp_score: f64) -> Self {
        Self {
            player_name: Some(player_name.to_string()),
            vorp_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionGrade {
    pub position: Position,
    pub score: f64,
    pub grade: Grade,
    pub projected_points: f64,
    pub player_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Weakness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub message: String,
}

impl Recommendation {
    fn weakness(position: Position) -> Self {
        Self {
            kind: RecommendationKind::Weakness,
            priority: Priority::High,
            message: format!("Focus on improving {}", position),
        }
    }
}

/// Grades for a whole team. Position grades follow the order positions first
/// appear in the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGrade {
    pub overall_score: f64,
    pub overall_grade: Grade,
    pub position_grades: Vec<PositionGrade>,
    pub recommendations: Vec<Recommendation>,
}

impl TeamGrade {
    pub fn position(&self, pos: Position) -> Option<&PositionGrade> {
        self.position_grades.iter().find(|g| g.position == pos)
    }
}

/// Grades rosters against a VORP lookup fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct PositionGrader {
    vorp_by_name: HashMap<String, f64>,
}

impl PositionGrader {
    /// Build the lookup keyed by lower-cased player name. Later duplicates
    /// overwrite earlier ones; entries without a name are skipped.
    pub fn new(entries: &[VorpEntry]) -> Self {
        let vorp_by_name = entries
            .iter()
            .filter_map(|e| {
                e.player_name
                    .as_deref()
                    .map(|name| (name.to_lowercase(), e.vorp_score))
            })
            .collect();

        Self { vorp_by_name }
    }

    /// VORP for a player name, 0 when unknown.
    pub fn vorp_for(&self, player_name: &str) -> f64 {
        self.vorp_by_name
            .get(&player_name.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.vorp_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vorp_by_name.is_empty()
    }

    /// Grade every position group of `team.roster` plus the team overall.
    ///
    /// The whole roster is graded, not just starters. League settings do not
    /// currently affect scoring.
    pub fn calculate_position_grades(&self, team: &Team, _settings: &LeagueSettings) -> TeamGrade {
        let groups = PositionGroups::from_roster(&team.roster);

        let position_grades: Vec<PositionGrade> = groups
            .iter()
            .map(|(position, players)| {
                let vorp_total: f64 = players
                    .iter()
                    .map(|p| p.player_name.as_deref().map_or(0.0, |n| self.vorp_for(n)))
                    .sum();
                let projected_points: f64 = players.iter().map(|p| p.projected_points).sum();
                let score = position_score(vorp_total, projected_points);

                PositionGrade {
                    position,
                    score,
                    grade: Grade::from_score(score),
                    projected_points,
                    player_count: players.len(),
                }
            })
            .collect();

        let overall_score = position_grades.iter().map(|g| g.score).sum::<f64>()
            / position_grades.len().max(1) as f64;

        let recommendations = weakest_position(&position_grades)
            .map(Recommendation::weakness)
            .into_iter()
            .collect();

        TeamGrade {
            overall_score,
            overall_grade: Grade::from_score(overall_score),
            position_grades,
            recommendations,
        }
    }
}

/// Linear blend of VORP and projection, floored at zero.
pub fn position_score(vorp_total: f64, projected_total: f64) -> f64 {
    (vorp_total * VORP_WEIGHT + projected_total * PROJECTION_WEIGHT).max(0.0)
}

/// Lowest-scoring position; ties go to the earliest.
fn weakest_position(grades: &[PositionGrade]) -> Option<Position> {
    grades
        .iter()
        .fold(None, |weakest: Option<&PositionGrade>, g| match weakest {
            Some(w) if w.score <= g.score => Some(w),
            _ => Some(g),
        })
        .map(|g| g.position)
}
