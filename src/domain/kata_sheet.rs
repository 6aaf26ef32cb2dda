use serde::{Deserialize, Serialize};

use super::models::{AthleteId, CategoryId, MatchId, ResultStatus};
use crate::config::JudgeCount;
use crate::errors::ScoringError;
use crate::scoring::{compute_for_panel, ScoreValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeScore {
    pub judge_id: String,
    pub score: ScoreValue,
}

/// Score sheet for one kata performance. `final_score` is only ever
/// written from the judge scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KataScore {
    pub id: i64,
    pub category_id: CategoryId,
    pub match_id: MatchId,
    pub athlete_id: AthleteId,
    pub judge_scores: Vec<JudgeScore>,
    pub final_score: ScoreValue,
    pub status: ResultStatus,
}

impl KataScore {
    /// Records a full panel as a pending sheet.
    pub fn record(
        category_id: CategoryId,
        match_id: MatchId,
        athlete_id: AthleteId,
        scores: &[ScoreValue],
        judges: JudgeCount,
    ) -> Result<Self, ScoringError> {
        let (judge_scores, final_score) = score_full_panel(scores, judges)?;

        Ok(Self {
            id: 0,
            category_id,
            match_id,
            athlete_id,
            judge_scores,
            final_score,
            status: ResultStatus::Pending,
        })
    }

    pub fn publish(&mut self) {
        if self.status == ResultStatus::Pending {
            self.status = ResultStatus::Official;
        }
    }

    /// Changes the panel of a published sheet; the sheet is marked corrected.
    pub fn correct(
        &mut self,
        scores: &[ScoreValue],
        judges: JudgeCount,
    ) -> Result<(), ScoringError> {
        self.apply_panel(scores, judges)?;
        self.status = ResultStatus::Corrected;
        Ok(())
    }

    fn apply_panel(
        &mut self,
        scores: &[ScoreValue],
        judges: JudgeCount,
    ) -> Result<(), ScoringError> {
        let (judge_scores, final_score) = score_full_panel(scores, judges)?;
        self.judge_scores = judge_scores;
        self.final_score = final_score;
        Ok(())
    }
}

fn score_full_panel(
    scores: &[ScoreValue],
    judges: JudgeCount,
) -> Result<(Vec<JudgeScore>, ScoreValue), ScoringError> {
    if scores.len() != judges.as_usize() {
        return Err(ScoringError::InvalidInput {
            expected: format!("exactly {}", judges.as_usize()),
            actual: scores.len(),
        });
    }

    let final_score = compute_for_panel(scores, judges)?;
    let judge_scores = scores
        .iter()
        .enumerate()
        .map(|(idx, &score)| JudgeScore {
            judge_id: format!("judge-{}", idx),
            score,
        })
        .collect();

    Ok((judge_scores, final_score))
}
