use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

use crate::config::AppConfig;
use crate::database::DbPool;
use crate::errors::{NotFound, ScoringError};

pub mod results;
pub mod scoring;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

/// Maps a service failure onto an HTTP status. Rule violations are the
/// caller's fault (422), missing rows are 404, anything else is ours.
pub(crate) fn error_response(err: anyhow::Error) -> Response {
    if let Some(scoring) = err.downcast_ref::<ScoringError>() {
        let status = match scoring {
            ScoringError::ResultLocked { .. } | ScoringError::HistoryRewritten { .. } => {
                StatusCode::CONFLICT
            }
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        return (status, scoring.to_string()).into_response();
    }
    if let Some(missing) = err.downcast_ref::<NotFound>() {
        return (StatusCode::NOT_FOUND, missing.to_string()).into_response();
    }

    error!("Request failed: {:?}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal Error: {}", err)).into_response()
}
