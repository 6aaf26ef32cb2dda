use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{
    BoutStateResponse, EvaluateBoutRequest, EvaluateBoutResponse, KataCorrection, KataScoreRequest,
    KataScoreResponse, KataSubmission, PlacementRequest, StartBoutRequest, StatusUpdate,
};
use crate::config::JudgeCount;
use crate::domain::{BoutUpdate, CategoryId, ResultStatus};
use crate::scoring::{self, BoutDecision, Competitor, DecisionReason};
use crate::services::scoring::ScoringService;

pub async fn score_kata(
    State(state): State<Arc<AppState>>,
    Json(request): Json<KataScoreRequest>,
) -> impl IntoResponse {
    let judges = match request.judges {
        Some(count) => match JudgeCount::try_from(count) {
            Ok(judges) => judges,
            Err(message) => return (StatusCode::UNPROCESSABLE_ENTITY, message).into_response(),
        },
        None => state.config.rules.kata_judges_count,
    };

    match scoring::compute_for_panel(&request.scores, judges) {
        Ok(final_score) => Json(KataScoreResponse {
            final_score,
            judge_count: request.scores.len(),
        })
        .into_response(),
        Err(e) => error_response(e.into()),
    }
}

pub async fn evaluate_bout(Json(request): Json<EvaluateBoutRequest>) -> impl IntoResponse {
    let decision = scoring::evaluate(
        &request.athlete1_points,
        &request.athlete2_points,
        request.elapsed_seconds,
        request.match_duration_seconds,
        request.senshu_enabled,
    );

    Json(EvaluateBoutResponse {
        athlete1_total: scoring::total_points(&request.athlete1_points),
        athlete2_total: scoring::total_points(&request.athlete2_points),
        decision,
        message: describe(&decision),
    })
}

fn describe(decision: &BoutDecision) -> String {
    let winner = match decision.winner {
        Some(Competitor::Athlete1) => "Athlete 1",
        Some(Competitor::Athlete2) => "Athlete 2",
        None => "",
    };

    match decision.reason {
        DecisionReason::Lead => format!("{} wins by {}-point lead", winner, scoring::WINNING_LEAD),
        DecisionReason::TimeExpiredScore => format!("{} wins on points", winner),
        DecisionReason::Senshu => format!("{} wins by Senshu", winner),
        DecisionReason::RequiresDecision => "Tie - requires referee decision".to_string(),
        DecisionReason::InProgress => "Bout in progress".to_string(),
    }
}

pub async fn submit_kata(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<CategoryId>,
    Json(submission): Json<KataSubmission>,
) -> impl IntoResponse {
    let service = ScoringService::new(state.pool.clone());
    let KataSubmission {
        match_id,
        athlete_id,
        scores,
    } = submission;
    match service.submit_kata(category_id, match_id, athlete_id, &scores) {
        Ok(sheet) => (StatusCode::CREATED, Json(sheet)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn correct_kata(
    State(state): State<Arc<AppState>>,
    Path((category_id, score_id)): Path<(CategoryId, i64)>,
    Json(correction): Json<KataCorrection>,
) -> impl IntoResponse {
    let service = ScoringService::new(state.pool.clone());
    match service.correct_kata(category_id, score_id, &correction.scores) {
        Ok(sheet) => Json(sheet).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn start_bout(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<CategoryId>,
    Json(request): Json<StartBoutRequest>,
) -> impl IntoResponse {
    let service = ScoringService::new(state.pool.clone());
    match service.start_bout(category_id, request.athlete1_id, request.athlete2_id) {
        Ok(bout) => (StatusCode::CREATED, Json(bout)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_bout(
    State(state): State<Arc<AppState>>,
    Path(bout_id): Path<i64>,
    Json(update): Json<BoutUpdate>,
) -> impl IntoResponse {
    let service = ScoringService::new(state.pool.clone());
    match service.update_bout(bout_id, &update) {
        Ok((bout, decision)) => Json(BoutStateResponse { bout, decision }).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn record_placement(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<CategoryId>,
    Json(request): Json<PlacementRequest>,
) -> impl IntoResponse {
    let service = ScoringService::new(state.pool.clone());
    let status = request.status.unwrap_or(ResultStatus::Pending);
    match service.record_placement(category_id, request.athlete_id, request.position, status) {
        Ok(result) => (StatusCode::CREATED, Json(result)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_result_status(
    State(state): State<Arc<AppState>>,
    Path(result_id): Path<i64>,
    Json(update): Json<StatusUpdate>,
) -> impl IntoResponse {
    let service = ScoringService::new(state.pool.clone());
    match service.set_result_status(result_id, update.status) {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(e),
    }
}
