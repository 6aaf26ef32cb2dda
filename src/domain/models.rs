use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::PointTable;

pub type TournamentId = i64;
pub type TeamId = i64;
pub type AthleteId = i64;
pub type CategoryId = i64;
pub type MatchId = i64;

/// Team / dojo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: AthleteId,
    pub name: String,
    pub team_id: Option<TeamId>,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub team_championship_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Kata,
    Kumite,
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Kata => "Kata",
            EventType::Kumite => "Kumite",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Kata" => Some(EventType::Kata),
            "Kumite" => Some(EventType::Kumite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub event_type: EventType,
    pub age_min: u32,
    pub age_max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Podium placements map onto medals; anything below third gets none.
    pub fn from_position(position: u32) -> Option<Self> {
        match position {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Gold" => Some(Medal::Gold),
            "Silver" => Some(Medal::Silver),
            "Bronze" => Some(Medal::Bronze),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Pending,
    Official,
    Corrected,
}

impl ResultStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ResultStatus::Pending => "pending",
            ResultStatus::Official => "official",
            ResultStatus::Corrected => "corrected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ResultStatus::Pending),
            "official" => Some(ResultStatus::Official),
            "corrected" => Some(ResultStatus::Corrected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    InProgress,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(MatchStatus::Pending),
            "in_progress" => Some(MatchStatus::InProgress),
            "completed" => Some(MatchStatus::Completed),
            _ => None,
        }
    }
}

/// Authoritative placement of one athlete in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialResult {
    pub id: i64,
    pub category_id: CategoryId,
    pub athlete_id: AthleteId,
    pub position: u32,
    pub medal: Option<Medal>,
    pub points: u32, // Team scoring weight
    pub status: ResultStatus,
    pub recorded_at: Option<NaiveDateTime>,
}

impl OfficialResult {
    /// Builds a pending result for a placement, deriving medal and team
    /// points from the position.
    pub fn from_placement(
        category_id: CategoryId,
        athlete_id: AthleteId,
        position: u32,
        point_table: &PointTable,
    ) -> Self {
        let medal = Medal::from_position(position);
        let points = medal.map(|m| point_table.points_for(m)).unwrap_or(0);

        Self {
            id: 0,
            category_id,
            athlete_id,
            position,
            medal,
            points,
            status: ResultStatus::Pending,
            recorded_at: None,
        }
    }

    pub fn is_official(&self) -> bool {
        self.status == ResultStatus::Official
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_positions_map_to_medals() {
        assert_eq!(Medal::from_position(1), Some(Medal::Gold));
        assert_eq!(Medal::from_position(2), Some(Medal::Silver));
        assert_eq!(Medal::from_position(3), Some(Medal::Bronze));
        assert_eq!(Medal::from_position(4), None);
        assert_eq!(Medal::from_position(0), None);
    }

    #[test]
    fn placement_uses_point_table_weight() {
        let table = PointTable {
            gold: 5,
            silver: 3,
            bronze: 1,
        };

        let silver = OfficialResult::from_placement(1, 10, 2, &table);
        assert_eq!(silver.medal, Some(Medal::Silver));
        assert_eq!(silver.points, 3);
        assert_eq!(silver.status, ResultStatus::Pending);

        let fifth = OfficialResult::from_placement(1, 11, 5, &table);
        assert_eq!(fifth.medal, None);
        assert_eq!(fifth.points, 0);
    }

    #[test]
    fn statuses_round_trip_through_storage_strings() {
        for status in [ResultStatus::Pending, ResultStatus::Official, ResultStatus::Corrected] {
            assert_eq!(ResultStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(MatchStatus::parse("in_progress"), Some(MatchStatus::InProgress));
        assert_eq!(Medal::parse("Platinum"), None);
    }
}
