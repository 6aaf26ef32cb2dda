use super::types::ScoreValue;
use crate::config::JudgeCount;
use crate::errors::ScoringError;

/// Smallest panel that still leaves a score after trimming.
pub const MIN_JUDGE_SCORES: usize = 3;
pub const MIN_JUDGE_SCORE: ScoreValue = 0.0;
pub const MAX_JUDGE_SCORE: ScoreValue = 10.0;

/// Trimmed-sum kata rule: drops exactly one lowest and one highest score
/// and sums the rest.
pub fn compute_kata_final_score(scores: &[ScoreValue]) -> Result<ScoreValue, ScoringError> {
    if scores.len() < MIN_JUDGE_SCORES {
        return Err(ScoringError::InvalidInput {
            expected: format!("at least {}", MIN_JUDGE_SCORES),
            actual: scores.len(),
        });
    }

    let sorted = sort_ascending(scores);
    Ok(sum_trimmed(&sorted))
}

/// Same rule, with the panel checked against the tournament's judge count
/// and every score checked against the judging range.
pub fn compute_for_panel(
    scores: &[ScoreValue],
    judges: JudgeCount,
) -> Result<ScoreValue, ScoringError> {
    validate_panel_size(scores.len(), judges)?;
    validate_score_range(scores)?;
    compute_kata_final_score(scores)
}

fn validate_panel_size(count: usize, judges: JudgeCount) -> Result<(), ScoringError> {
    let max = judges.as_usize();
    if count < MIN_JUDGE_SCORES || count > max {
        return Err(ScoringError::InvalidInput {
            expected: format!("between {} and {}", MIN_JUDGE_SCORES, max),
            actual: count,
        });
    }
    Ok(())
}

fn validate_score_range(scores: &[ScoreValue]) -> Result<(), ScoringError> {
    match scores
        .iter()
        .find(|s| !(MIN_JUDGE_SCORE..=MAX_JUDGE_SCORE).contains(*s))
    {
        Some(&score) => Err(ScoringError::ScoreOutOfRange {
            score,
            min: MIN_JUDGE_SCORE,
            max: MAX_JUDGE_SCORE,
        }),
        None => Ok(()),
    }
}

fn sort_ascending(scores: &[ScoreValue]) -> Vec<ScoreValue> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

fn sum_trimmed(sorted: &[ScoreValue]) -> ScoreValue {
    sorted[1..sorted.len() - 1].iter().sum()
}
