use serde::{Deserialize, Serialize};

use super::aggregation::aggregate;
use super::ranking::rank;
use super::types::{TeamStanding, UnresolvedTeamWarning};
use crate::config::{PointTable, TournamentRules};
use crate::domain::{OfficialResult, TeamResolver, Tournament, TournamentId};

/// Derived team-championship view for a tournament. Rebuilt on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamChampionship {
    pub tournament_id: TournamentId,
    pub enabled: bool,
    pub point_rules: PointTable,
    pub standings: Vec<TeamStanding>,
    pub unresolved: Vec<UnresolvedTeamWarning>,
}

pub fn compute_championship<R: TeamResolver + ?Sized>(
    tournament: &Tournament,
    rules: &TournamentRules,
    results: &[OfficialResult],
    resolver: &R,
) -> TeamChampionship {
    let point_rules = rules.team_point_rules;

    if !tournament.team_championship_enabled {
        return TeamChampionship {
            tournament_id: tournament.id,
            enabled: false,
            point_rules,
            standings: Vec::new(),
            unresolved: Vec::new(),
        };
    }

    let aggregation = aggregate(results, resolver, &point_rules);

    TeamChampionship {
        tournament_id: tournament.id,
        enabled: true,
        point_rules,
        standings: rank(&aggregation.records),
        unresolved: aggregation.unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AthleteId, ResultStatus, TeamId};
    use std::collections::HashMap;

    fn tournament(enabled: bool) -> Tournament {
        Tournament {
            id: 42,
            name: "Spring Open".to_string(),
            team_championship_enabled: enabled,
        }
    }

    fn official(athlete_id: AthleteId, position: u32) -> OfficialResult {
        let mut r = OfficialResult::from_placement(1, athlete_id, position, &PointTable::default());
        r.status = ResultStatus::Official;
        r
    }

    #[test]
    fn enabled_championship_ranks_teams() {
        let roster: HashMap<AthleteId, TeamId> = [(10, 1), (11, 1), (20, 2)].into_iter().collect();
        let results = vec![official(10, 1), official(11, 2), official(20, 1)];

        let championship =
            compute_championship(&tournament(true), &TournamentRules::default(), &results, &roster);

        assert!(championship.enabled);
        let order: Vec<TeamId> = championship.standings.iter().map(|s| s.team_id).collect();
        assert_eq!(order, vec![1, 2]);
        assert_eq!(championship.standings[0].tally.total_points, 5);
    }

    #[test]
    fn disabled_championship_has_no_standings() {
        let roster: HashMap<AthleteId, TeamId> = [(10, 1)].into_iter().collect();
        let results = vec![official(10, 1)];

        let rules = TournamentRules::default();
        let championship = compute_championship(&tournament(false), &rules, &results, &roster);

        assert!(!championship.enabled);
        assert!(championship.standings.is_empty());
    }
}
