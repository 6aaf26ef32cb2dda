use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AthleteId, Medal, TeamId};

/// Medal counts and weighted points for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTally {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total_points: u32,
}

impl TeamTally {
    pub fn count(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }
}

pub type TeamRecords = BTreeMap<TeamId, TeamTally>;

/// An official medal result whose athlete could not be placed in a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedTeamWarning {
    pub result_id: i64,
    pub athlete_id: AthleteId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub records: TeamRecords,
    pub unresolved: Vec<UnresolvedTeamWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub rank: usize,
    pub team_id: TeamId,
    #[serde(flatten)]
    pub tally: TeamTally,
}
