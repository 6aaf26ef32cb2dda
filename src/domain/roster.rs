use std::collections::HashMap;

use super::models::{Athlete, AthleteId, TeamId};

/// Resolves an athlete's team from roster membership owned elsewhere.
pub trait TeamResolver {
    fn team_of(&self, athlete_id: AthleteId) -> Option<TeamId>;
}

impl TeamResolver for HashMap<AthleteId, TeamId> {
    fn team_of(&self, athlete_id: AthleteId) -> Option<TeamId> {
        self.get(&athlete_id).copied()
    }
}

/// Snapshot of athlete → team membership.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    memberships: HashMap<AthleteId, TeamId>,
}

impl Roster {
    pub fn from_athletes(athletes: &[Athlete]) -> Self {
        let memberships = athletes
            .iter()
            .filter_map(|a| a.team_id.map(|team_id| (a.id, team_id)))
            .collect();
        Self { memberships }
    }
}

impl TeamResolver for Roster {
    fn team_of(&self, athlete_id: AthleteId) -> Option<TeamId> {
        self.memberships.team_of(athlete_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete(id: AthleteId, team_id: Option<TeamId>) -> Athlete {
        Athlete {
            id,
            name: format!("Athlete {}", id),
            team_id,
            age: 16,
        }
    }

    #[test]
    fn roster_skips_athletes_without_team() {
        let roster = Roster::from_athletes(&[athlete(1, Some(10)), athlete(2, None)]);
        assert_eq!(roster.team_of(1), Some(10));
        assert_eq!(roster.team_of(2), None);
        assert_eq!(roster.team_of(3), None);
    }

    #[test]
    fn plain_map_resolves_memberships() {
        let map: HashMap<AthleteId, TeamId> = [(5, 1)].into_iter().collect();
        assert_eq!(map.team_of(5), Some(1));
        assert_eq!(map.team_of(500), None);
    }
}
