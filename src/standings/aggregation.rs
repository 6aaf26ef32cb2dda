use log::warn;

use super::types::{Aggregation, TeamRecords, UnresolvedTeamWarning};
use crate::config::PointTable;
use crate::domain::{Medal, OfficialResult, TeamResolver};

/// Folds the full result set into per-team medal counts and points.
///
/// Always recomputed from scratch: results that are not official, carry no
/// medal, or belong to an athlete without a team are left out. The latter are
/// reported back so roster gaps stay visible.
pub fn aggregate<R: TeamResolver + ?Sized>(
    results: &[OfficialResult],
    resolver: &R,
    point_table: &PointTable,
) -> Aggregation {
    let mut records = TeamRecords::new();
    let mut unresolved = Vec::new();

    for (result, medal) in medal_results(results) {
        match resolver.team_of(result.athlete_id) {
            Some(team_id) => records.entry(team_id).or_default().count(medal),
            None => {
                warn!(
                    "Official result {} for athlete {} has no team, excluded from standings",
                    result.id, result.athlete_id
                );
                unresolved.push(UnresolvedTeamWarning {
                    result_id: result.id,
                    athlete_id: result.athlete_id,
                });
            }
        }
    }

    apply_point_table(&mut records, point_table);
    Aggregation {
        records,
        unresolved,
    }
}

fn medal_results(results: &[OfficialResult]) -> impl Iterator<Item = (&OfficialResult, Medal)> {
    results
        .iter()
        .filter(|r| r.is_official())
        .filter_map(|r| r.medal.map(|medal| (r, medal)))
}

fn apply_point_table(records: &mut TeamRecords, point_table: &PointTable) {
    for tally in records.values_mut() {
        tally.total_points = point_table.total(tally.gold, tally.silver, tally.bronze);
    }
}
