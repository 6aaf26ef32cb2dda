use anyhow::Result;
use log::info;

use crate::config::TournamentRules;
use crate::database::{self, DbConn, DbPool};
use crate::domain::{
    AthleteId, BoutUpdate, Category, CategoryId, KataScore, KumiteMatch, MatchId, OfficialResult,
    ResultStatus,
};
use crate::errors::NotFound;
use crate::scoring::{BoutDecision, ScoreValue};

/// Write side: turns referee input into persisted score sheets, bouts and
/// placements. Returned values are re-read from the database after writing.
pub struct ScoringService {
    pool: DbPool,
}

impl ScoringService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn submit_kata(
        &self,
        category_id: CategoryId,
        match_id: MatchId,
        athlete_id: AthleteId,
        scores: &[ScoreValue],
    ) -> Result<KataScore> {
        let mut conn = database::get_connection(&self.pool)?;
        let (_, rules) = load_category_rules(&mut conn, category_id)?;

        let mut sheet =
            KataScore::record(category_id, match_id, athlete_id, scores, rules.kata_judges_count)?;
        sheet.publish();

        let stored = database::kata_scores::insert_kata_score(&mut conn, &sheet)?;
        info!(
            "Kata score {} for athlete {}: {:.2}",
            stored.id, athlete_id, stored.final_score
        );
        Ok(stored)
    }

    /// Corrects a sheet of the given category. The panel is validated against
    /// the rules of the tournament the sheet was recorded in.
    pub fn correct_kata(
        &self,
        category_id: CategoryId,
        score_id: i64,
        scores: &[ScoreValue],
    ) -> Result<KataScore> {
        let mut conn = database::get_connection(&self.pool)?;

        let mut sheet = database::kata_scores::find_by_id(&mut conn, score_id)?
            .filter(|sheet| sheet.category_id == category_id)
            .ok_or(NotFound::new("kata score", score_id))?;
        let (_, rules) = load_category_rules(&mut conn, sheet.category_id)?;
        sheet.correct(scores, rules.kata_judges_count)?;
        database::kata_scores::update_kata_score(&mut conn, &sheet)?;

        info!("Kata score {} corrected to {:.2}", sheet.id, sheet.final_score);
        Ok(sheet)
    }

    /// Opens a bout with the duration configured for the category's age bracket.
    pub fn start_bout(
        &self,
        category_id: CategoryId,
        athlete1_id: AthleteId,
        athlete2_id: AthleteId,
    ) -> Result<KumiteMatch> {
        let mut conn = database::get_connection(&self.pool)?;
        let (category, rules) = load_category_rules(&mut conn, category_id)?;

        let duration = rules.match_duration_for(category.age_min);
        let bout = KumiteMatch::new(category_id, athlete1_id, athlete2_id, duration);
        database::kumite_matches::insert_match(&mut conn, &bout)
    }

    /// Merges the referee's update into the stored bout and evaluates the
    /// result against the rules of the bout's own category. Duration,
    /// category and athletes always come from the stored row; the winner is
    /// only set when the bout is decided.
    pub fn update_bout(
        &self,
        bout_id: i64,
        update: &BoutUpdate,
    ) -> Result<(KumiteMatch, BoutDecision)> {
        let mut conn = database::get_connection(&self.pool)?;

        let mut bout = database::kumite_matches::find_by_id(&mut conn, bout_id)?
            .ok_or(NotFound::new("kumite match", bout_id))?;
        let (_, rules) = load_category_rules(&mut conn, bout.category_id)?;

        bout.apply_update(update)?;
        let decision = bout.apply_evaluation(rules.senshu_enabled);
        if !database::kumite_matches::save_match(&mut conn, &bout)? {
            return Err(NotFound::new("kumite match", bout.id).into());
        }

        let stored = database::kumite_matches::find_by_id(&mut conn, bout.id)?
            .ok_or(NotFound::new("kumite match", bout.id))?;
        info!("Bout {} evaluated: {}", stored.id, decision.reason.as_str());
        Ok((stored, decision))
    }

    pub fn record_placement(
        &self,
        category_id: CategoryId,
        athlete_id: AthleteId,
        position: u32,
        status: ResultStatus,
    ) -> Result<OfficialResult> {
        let mut conn = database::get_connection(&self.pool)?;
        let (_, rules) = load_category_rules(&mut conn, category_id)?;

        let table = &rules.team_point_rules;
        let mut result = OfficialResult::from_placement(category_id, athlete_id, position, table);
        result.status = status;

        database::results::insert_result(&mut conn, &result)
    }

    pub fn set_result_status(
        &self,
        result_id: i64,
        status: ResultStatus,
    ) -> Result<OfficialResult> {
        let mut conn = database::get_connection(&self.pool)?;
        if !database::results::update_status(&mut conn, result_id, status)? {
            return Err(NotFound::new("result", result_id).into());
        }
        info!("Result {} moved to {}", result_id, status.as_str());

        database::results::find_by_id(&mut conn, result_id)?
            .ok_or_else(|| NotFound::new("result", result_id).into())
    }
}

fn load_category_rules(
    conn: &mut DbConn,
    category_id: CategoryId,
) -> Result<(Category, TournamentRules)> {
    let category = database::categories::find_by_id(conn, category_id)?
        .ok_or(NotFound::new("category", category_id))?;
    let rules = database::tournaments::find_rules(conn, category.tournament_id)?
        .unwrap_or_default();
    Ok((category, rules))
}
