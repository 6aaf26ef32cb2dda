use serde::{Deserialize, Serialize};

use super::models::{AthleteId, CategoryId, MatchStatus, ResultStatus};
use crate::errors::ScoringError;
use crate::scoring::{self, BoutDecision, Competitor, KumitePoint, PointTotal};

/// Bout state reported by the referee client. Only the point logs, penalty
/// counts and clock are taken from it; everything else stays as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoutUpdate {
    pub athlete1_points: Vec<KumitePoint>,
    pub athlete2_points: Vec<KumitePoint>,
    #[serde(default)]
    pub athlete1_penalties: u32,
    #[serde(default)]
    pub athlete2_penalties: u32,
    pub elapsed_time: u32,
}

/// Live state of a kumite bout as operated by a single referee client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KumiteMatch {
    pub id: i64,
    pub category_id: CategoryId,
    pub athlete1_id: AthleteId,
    pub athlete2_id: AthleteId,
    pub athlete1_points: Vec<KumitePoint>,
    pub athlete2_points: Vec<KumitePoint>,
    pub athlete1_penalties: u32,
    pub athlete2_penalties: u32,
    pub match_duration: u32,
    pub elapsed_time: u32,
    pub winner_id: Option<AthleteId>,
    pub status: MatchStatus,
    pub result_status: ResultStatus,
}

impl KumiteMatch {
    pub fn new(
        category_id: CategoryId,
        athlete1_id: AthleteId,
        athlete2_id: AthleteId,
        match_duration: u32,
    ) -> Self {
        Self {
            id: 0,
            category_id,
            athlete1_id,
            athlete2_id,
            athlete1_points: Vec::new(),
            athlete2_points: Vec::new(),
            athlete1_penalties: 0,
            athlete2_penalties: 0,
            match_duration,
            elapsed_time: 0,
            winner_id: None,
            status: MatchStatus::Pending,
            result_status: ResultStatus::Pending,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Appends a point for one side. Ignored once the bout is finished.
    pub fn record_point(&mut self, side: Competitor, point: KumitePoint) {
        if self.is_finished() {
            return;
        }
        let log = self.points_mut(side);
        *log = scoring::append_event(log, point);
        self.status = MatchStatus::InProgress;
    }

    pub fn record_penalty(&mut self, side: Competitor) {
        if self.is_finished() {
            return;
        }
        match side {
            Competitor::Athlete1 => self.athlete1_penalties += 1,
            Competitor::Athlete2 => self.athlete2_penalties += 1,
        }
    }

    /// Advances the bout clock, never past the configured duration.
    pub fn tick(&mut self, seconds: u32) {
        if self.is_finished() {
            return;
        }
        self.elapsed_time = (self.elapsed_time + seconds).min(self.match_duration);
        if self.status == MatchStatus::Pending {
            self.status = MatchStatus::InProgress;
        }
    }

    pub fn totals(&self) -> (PointTotal, PointTotal) {
        (
            scoring::total_points(&self.athlete1_points),
            scoring::total_points(&self.athlete2_points),
        )
    }

    pub fn evaluate(&self, senshu_enabled: bool) -> BoutDecision {
        scoring::evaluate(
            &self.athlete1_points,
            &self.athlete2_points,
            self.elapsed_time,
            self.match_duration,
            senshu_enabled,
        )
    }

    /// Evaluates the bout and, when a winner is decided, closes it and marks
    /// the result official. Undecided bouts keep running.
    pub fn apply_evaluation(&mut self, senshu_enabled: bool) -> BoutDecision {
        let decision = self.evaluate(senshu_enabled);

        match decision.winner {
            Some(side) => {
                self.winner_id = Some(self.athlete_for(side));
                self.status = MatchStatus::Completed;
                self.result_status = ResultStatus::Official;
            }
            None => {
                self.winner_id = None;
                self.status = MatchStatus::InProgress;
                self.result_status = ResultStatus::Pending;
            }
        }

        decision
    }

    /// Merges a client update into the stored bout. The update must extend
    /// the recorded point logs and penalty counts; new events are appended and
    /// the clock only moves forward. Nothing changes when the update is rejected.
    pub fn apply_update(&mut self, update: &BoutUpdate) -> Result<(), ScoringError> {
        if self.is_finished() {
            return Err(ScoringError::ResultLocked {
                status: self.status.as_str().to_string(),
            });
        }
        for side in [Competitor::Athlete1, Competitor::Athlete2] {
            let (points, penalties) = update.side(side);
            let extends =
                points.starts_with(self.points(side)) && penalties >= self.penalties(side);
            if !extends {
                return Err(ScoringError::HistoryRewritten {
                    side: side_label(side).to_string(),
                });
            }
        }

        for side in [Competitor::Athlete1, Competitor::Athlete2] {
            let (points, penalties) = update.side(side);
            let recorded = self.points(side).len();
            for &point in &points[recorded..] {
                self.record_point(side, point);
            }
            for _ in self.penalties(side)..penalties {
                self.record_penalty(side);
            }
        }
        self.tick(update.elapsed_time.saturating_sub(self.elapsed_time));

        Ok(())
    }

    pub fn athlete_for(&self, side: Competitor) -> AthleteId {
        match side {
            Competitor::Athlete1 => self.athlete1_id,
            Competitor::Athlete2 => self.athlete2_id,
        }
    }

    fn points(&self, side: Competitor) -> &[KumitePoint] {
        match side {
            Competitor::Athlete1 => &self.athlete1_points,
            Competitor::Athlete2 => &self.athlete2_points,
        }
    }

    fn penalties(&self, side: Competitor) -> u32 {
        match side {
            Competitor::Athlete1 => self.athlete1_penalties,
            Competitor::Athlete2 => self.athlete2_penalties,
        }
    }

    fn points_mut(&mut self, side: Competitor) -> &mut Vec<KumitePoint> {
        match side {
            Competitor::Athlete1 => &mut self.athlete1_points,
            Competitor::Athlete2 => &mut self.athlete2_points,
        }
    }
}

impl BoutUpdate {
    fn side(&self, side: Competitor) -> (&[KumitePoint], u32) {
        match side {
            Competitor::Athlete1 => (self.athlete1_points.as_slice(), self.athlete1_penalties),
            Competitor::Athlete2 => (self.athlete2_points.as_slice(), self.athlete2_penalties),
        }
    }
}

fn side_label(side: Competitor) -> &'static str {
    match side {
        Competitor::Athlete1 => "athlete 1",
        Competitor::Athlete2 => "athlete 2",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::DecisionReason;
    use KumitePoint::*;

    fn bout() -> KumiteMatch {
        KumiteMatch::new(3, 100, 200, 120)
    }

    #[test]
    fn new_bout_is_pending_without_winner() {
        let m = bout();
        assert_eq!(m.status, MatchStatus::Pending);
        assert_eq!(m.winner_id, None);
        assert_eq!(m.totals(), (0, 0));
    }

    #[test]
    fn points_accumulate_per_side() {
        let mut m = bout();
        m.record_point(Competitor::Athlete1, Ippon);
        m.record_point(Competitor::Athlete2, Yuko);
        m.record_point(Competitor::Athlete1, WazaAri);

        assert_eq!(m.totals(), (5, 1));
        assert_eq!(m.athlete1_points, vec![Ippon, WazaAri]);
        assert_eq!(m.status, MatchStatus::InProgress);
    }

    #[test]
    fn undecided_evaluation_leaves_winner_unset() {
        let mut m = bout();
        m.record_point(Competitor::Athlete1, Ippon);
        m.tick(60);

        let decision = m.apply_evaluation(true);
        assert_eq!(decision.reason, DecisionReason::InProgress);
        assert_eq!(m.winner_id, None);
        assert_eq!(m.result_status, ResultStatus::Pending);
    }

    #[test]
    fn lead_closes_bout_and_sets_winner() {
        let mut m = bout();
        for _ in 0..3 {
            m.record_point(Competitor::Athlete2, Ippon);
        }
        m.tick(45);

        let decision = m.apply_evaluation(true);
        assert_eq!(decision.reason, DecisionReason::Lead);
        assert_eq!(m.winner_id, Some(200));
        assert_eq!(m.status, MatchStatus::Completed);
        assert_eq!(m.result_status, ResultStatus::Official);
    }

    #[test]
    fn finished_bout_ignores_further_input() {
        let mut m = bout();
        m.record_point(Competitor::Athlete1, Yuko);
        m.tick(200);
        m.apply_evaluation(false);
        assert!(m.is_finished());

        m.record_point(Competitor::Athlete2, Ippon);
        m.record_penalty(Competitor::Athlete1);
        assert_eq!(m.totals(), (1, 0));
        assert_eq!(m.athlete1_penalties, 0);
    }

    #[test]
    fn clock_stops_at_match_duration() {
        let mut m = bout();
        m.tick(100);
        m.tick(100);
        assert_eq!(m.elapsed_time, 120);
    }

    #[test]
    fn time_up_tie_requires_decision() {
        let mut m = bout();
        m.record_point(Competitor::Athlete1, WazaAri);
        m.record_point(Competitor::Athlete2, WazaAri);
        m.tick(120);

        let decision = m.apply_evaluation(true);
        assert_eq!(decision.reason, DecisionReason::RequiresDecision);
        assert!(!m.is_finished());
    }

    fn update(a1: Vec<KumitePoint>, a2: Vec<KumitePoint>, elapsed: u32) -> BoutUpdate {
        BoutUpdate {
            athlete1_points: a1,
            athlete2_points: a2,
            athlete1_penalties: 0,
            athlete2_penalties: 0,
            elapsed_time: elapsed,
        }
    }

    #[test]
    fn update_appends_new_events_and_advances_clock() {
        let mut m = bout();
        m.record_point(Competitor::Athlete1, Yuko);

        m.apply_update(&update(vec![Yuko, Ippon], vec![WazaAri], 30)).unwrap();
        assert_eq!(m.athlete1_points, vec![Yuko, Ippon]);
        assert_eq!(m.totals(), (4, 2));
        assert_eq!(m.elapsed_time, 30);
        assert_eq!(m.match_duration, 120);
    }

    #[test]
    fn update_cannot_rewrite_recorded_points() {
        let mut m = bout();
        m.record_point(Competitor::Athlete1, Yuko);

        let err = m.apply_update(&update(vec![], vec![Ippon], 10)).unwrap_err();
        assert!(matches!(err, ScoringError::HistoryRewritten { .. }));
        assert_eq!(m.athlete1_points, vec![Yuko]);
        assert!(m.athlete2_points.is_empty());
        assert_eq!(m.elapsed_time, 0);
    }

    #[test]
    fn update_cannot_remove_penalties_or_rewind_clock() {
        let mut m = bout();
        m.record_penalty(Competitor::Athlete2);
        m.tick(50);

        let err = m.apply_update(&update(vec![], vec![], 60)).unwrap_err();
        assert!(matches!(err, ScoringError::HistoryRewritten { .. }));

        let mut keep = update(vec![], vec![], 20);
        keep.athlete2_penalties = 1;
        m.apply_update(&keep).unwrap();
        assert_eq!(m.elapsed_time, 50);
    }

    #[test]
    fn completed_bout_rejects_updates() {
        let mut m = bout();
        m.record_point(Competitor::Athlete1, Yuko);
        m.tick(120);
        m.apply_evaluation(true);

        let err = m.apply_update(&update(vec![Yuko], vec![Ippon], 120)).unwrap_err();
        assert!(matches!(err, ScoringError::ResultLocked { .. }));
        assert_eq!(m.winner_id, Some(100));
    }
}
