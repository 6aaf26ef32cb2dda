use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::ResultsParams;
use crate::domain::TournamentId;
use crate::services::standings::StandingsService;
use crate::standings::ResultView;

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> impl IntoResponse {
    let service = StandingsService::new(state.pool.clone());
    match service.team_championship(tournament_id) {
        Ok(Some(championship)) => Json(championship).into_response(),
        Ok(None) => {
            let message = format!("tournament {} not found", tournament_id);
            (StatusCode::NOT_FOUND, message).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn get_results(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
    Query(params): Query<ResultsParams>,
) -> impl IntoResponse {
    let view = match params.view.as_deref() {
        None => ResultView::Public,
        Some(raw) => match ResultView::parse(raw) {
            Some(view) => view,
            None => return (StatusCode::BAD_REQUEST, format!("unknown view '{}'", raw)).into_response(),
        },
    };

    let service = StandingsService::new(state.pool.clone());
    match service.results(tournament_id, view) {
        Ok(results) => Json(results).into_response(),
        Err(e) => error_response(e),
    }
}
