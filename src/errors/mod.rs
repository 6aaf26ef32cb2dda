use anyhow::Context as _;
use thiserror::Error;

/// Failures raised by the scoring rules themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("invalid judge panel: {actual} scores supplied, {expected} required")]
    InvalidInput { expected: String, actual: usize },
    #[error("judge score {score} is outside the allowed range {min}..={max}")]
    ScoreOutOfRange { score: f64, min: f64, max: f64 },
    #[error("result is {status} and cannot be changed without a correction")]
    ResultLocked { status: String },
    #[error("{side} bout record does not extend the recorded history")]
    HistoryRewritten { side: String },
}

/// A referenced row does not exist.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{entity} {id} not found")]
pub struct NotFound {
    pub entity: &'static str,
    pub id: i64,
}

impl NotFound {
    pub fn new(entity: &'static str, id: i64) -> Self {
        Self { entity, id }
    }
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
