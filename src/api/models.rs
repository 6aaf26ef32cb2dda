use serde::{Deserialize, Serialize};

use crate::domain::{AthleteId, KumiteMatch, MatchId, ResultStatus};
use crate::scoring::{BoutDecision, KumitePoint, PointTotal, ScoreValue};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KataScoreRequest {
    pub scores: Vec<ScoreValue>,
    pub judges: Option<u8>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KataScoreResponse {
    pub final_score: ScoreValue,
    pub judge_count: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KataSubmission {
    pub match_id: MatchId,
    pub athlete_id: AthleteId,
    pub scores: Vec<ScoreValue>,
}

#[derive(Deserialize)]
pub struct KataCorrection {
    pub scores: Vec<ScoreValue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateBoutRequest {
    pub athlete1_points: Vec<KumitePoint>,
    pub athlete2_points: Vec<KumitePoint>,
    pub elapsed_seconds: u32,
    pub match_duration_seconds: u32,
    pub senshu_enabled: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateBoutResponse {
    pub athlete1_total: PointTotal,
    pub athlete2_total: PointTotal,
    #[serde(flatten)]
    pub decision: BoutDecision,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBoutRequest {
    pub athlete1_id: AthleteId,
    pub athlete2_id: AthleteId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoutStateResponse {
    pub bout: KumiteMatch,
    pub decision: BoutDecision,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    pub athlete_id: AthleteId,
    pub position: u32,
    pub status: Option<ResultStatus>,
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: ResultStatus,
}

#[derive(Deserialize)]
pub struct ResultsParams {
    pub view: Option<String>,
}
