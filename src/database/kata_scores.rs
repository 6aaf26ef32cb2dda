use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::columns::{json_column, text_enum};
use super::connection::DbConn;
use crate::domain::{KataScore, ResultStatus};

const KATA_SCORE_COLUMNS: &str = "id, category_id, match_id, athlete_id, judge_scores, final_score, status";

pub fn insert_kata_score(conn: &mut DbConn, score: &KataScore) -> Result<KataScore> {
    let judge_scores = serde_json::to_string(&score.judge_scores)
        .context("Failed to serialize judge scores")?;
    let sql = format!(
        "INSERT INTO kata_scores (category_id, match_id, athlete_id, judge_scores, final_score, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {}",
        KATA_SCORE_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            score.category_id,
            score.match_id,
            score.athlete_id,
            judge_scores,
            score.final_score,
            score.status.as_str(),
        ],
        parse_kata_score_row,
    )
    .context("Failed to insert kata score")
}

pub fn update_kata_score(conn: &mut DbConn, score: &KataScore) -> Result<bool> {
    let judge_scores = serde_json::to_string(&score.judge_scores)
        .context("Failed to serialize judge scores")?;

    let updated = conn
        .execute(
            "UPDATE kata_scores SET judge_scores = ?1, final_score = ?2, status = ?3 WHERE id = ?4",
            params![judge_scores, score.final_score, score.status.as_str(), score.id],
        )
        .context("Failed to update kata score")?;
    Ok(updated > 0)
}

fn parse_kata_score_row(row: &rusqlite::Row) -> rusqlite::Result<KataScore> {
    Ok(KataScore {
        id: row.get(0)?,
        category_id: row.get(1)?,
        match_id: row.get(2)?,
        athlete_id: row.get(3)?,
        judge_scores: json_column(row, 4)?,
        final_score: row.get(5)?,
        status: text_enum(row, 6, ResultStatus::parse)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<KataScore>> {
    let sql = format!("SELECT {} FROM kata_scores WHERE id = ?1", KATA_SCORE_COLUMNS);

    conn.query_row(&sql, params![id], parse_kata_score_row)
        .optional()
        .context("Failed to query kata score by id")
}
