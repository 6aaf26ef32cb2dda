use std::cmp::Ordering;

use super::types::{TeamRecords, TeamStanding, TeamTally};
use crate::domain::TeamId;

/// Orders teams by total points, then gold, silver and bronze counts, all
/// descending. Teams still level are ordered by ascending team id.
pub fn rank(records: &TeamRecords) -> Vec<TeamStanding> {
    let mut entries: Vec<(TeamId, TeamTally)> = records.iter().map(|(id, t)| (*id, *t)).collect();
    entries.sort_by(compare_entries);

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, (team_id, tally))| TeamStanding {
            rank: idx + 1,
            team_id,
            tally,
        })
        .collect()
}

fn compare_entries(a: &(TeamId, TeamTally), b: &(TeamId, TeamTally)) -> Ordering {
    compare_tallies(&a.1, &b.1).then_with(|| a.0.cmp(&b.0))
}

fn compare_tallies(a: &TeamTally, b: &TeamTally) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| b.gold.cmp(&a.gold))
        .then_with(|| b.silver.cmp(&a.silver))
        .then_with(|| b.bronze.cmp(&a.bronze))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(gold: u32, silver: u32, bronze: u32, total_points: u32) -> TeamTally {
        TeamTally {
            gold,
            silver,
            bronze,
            total_points,
        }
    }

    fn order(records: &TeamRecords) -> Vec<TeamId> {
        rank(records).into_iter().map(|s| s.team_id).collect()
    }

    #[test]
    fn higher_total_ranks_first() {
        let records: TeamRecords =
            [(1, tally(1, 1, 0, 5)), (2, tally(1, 0, 0, 3))].into_iter().collect();
        let standings = rank(&records);

        assert_eq!(standings[0].team_id, 1);
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].team_id, 2);
        assert_eq!(standings[1].rank, 2);
    }

    #[test]
    fn gold_breaks_equal_totals() {
        // Both on 6 points: team 1 via three silvers, team 2 via two golds.
        let records: TeamRecords =
            [(1, tally(0, 3, 0, 6)), (2, tally(2, 0, 0, 6))].into_iter().collect();
        assert_eq!(order(&records), vec![2, 1]);
    }

    #[test]
    fn silver_breaks_tie_after_gold() {
        let records: TeamRecords =
            [(1, tally(1, 0, 3, 6)), (2, tally(1, 1, 1, 6))].into_iter().collect();
        assert_eq!(order(&records), vec![2, 1]);
    }

    #[test]
    fn bronze_is_the_last_medal_tie_break() {
        // Totals as produced by a table that awards nothing for bronze.
        let records: TeamRecords =
            [(1, tally(1, 1, 1, 5)), (2, tally(1, 1, 2, 5))].into_iter().collect();
        assert_eq!(order(&records), vec![2, 1]);
    }

    #[test]
    fn identical_tallies_fall_back_to_team_id() {
        let records: TeamRecords =
            [(9, tally(1, 0, 0, 3)), (4, tally(1, 0, 0, 3))].into_iter().collect();
        assert_eq!(order(&records), vec![4, 9]);
    }

    #[test]
    fn empty_records_rank_to_empty_standings() {
        assert!(rank(&TeamRecords::new()).is_empty());
    }
}
