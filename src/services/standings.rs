use anyhow::Result;
use log::info;

use crate::database::{self, DbPool};
use crate::domain::{OfficialResult, Roster, TournamentId};
use crate::standings::{self, ResultView, TeamChampionship};

/// Read side of the results engine. Every call re-reads the authoritative
/// rows, so concurrent dashboards never see a stale cached table.
pub struct StandingsService {
    pool: DbPool,
}

impl StandingsService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn team_championship(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Option<TeamChampionship>> {
        let mut conn = database::get_connection(&self.pool)?;

        let Some(tournament) = database::tournaments::find_by_id(&mut conn, tournament_id)? else {
            return Ok(None);
        };
        let rules = database::tournaments::find_rules(&mut conn, tournament_id)?
            .unwrap_or_default();

        let results = database::results::list_by_tournament(&mut conn, tournament_id)?;
        let roster = Roster::from_athletes(&database::roster::list_athletes(&mut conn)?);

        let championship = standings::compute_championship(&tournament, &rules, &results, &roster);
        info!(
            "Computed standings for tournament {}: {} teams from {} results ({} unresolved)",
            tournament_id,
            championship.standings.len(),
            results.len(),
            championship.unresolved.len()
        );

        Ok(Some(championship))
    }

    pub fn results(
        &self,
        tournament_id: TournamentId,
        view: ResultView,
    ) -> Result<Vec<OfficialResult>> {
        let mut conn = database::get_connection(&self.pool)?;
        let results = database::results::list_by_tournament(&mut conn, tournament_id)?;
        Ok(standings::visible_results(&results, view))
    }
}
