use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::columns::{optional_text_enum, text_enum};
use super::connection::DbConn;
use crate::domain::{CategoryId, Medal, OfficialResult, ResultStatus, TournamentId};

const RESULT_COLUMNS: &str = "r.id, r.category_id, r.athlete_id, r.position, r.medal, r.points, r.status, r.recorded_at";

pub fn insert_result(conn: &mut DbConn, result: &OfficialResult) -> Result<OfficialResult> {
    let sql = "INSERT INTO official_results (category_id, athlete_id, position, medal, points, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id, category_id, athlete_id, position, medal, points, status, recorded_at";

    conn.query_row(
        sql,
        params![
            result.category_id,
            result.athlete_id,
            result.position,
            result.medal.as_ref().map(Medal::as_str),
            result.points,
            result.status.as_str(),
        ],
        parse_result_row,
    )
    .context("Failed to insert official result")
}

fn parse_result_row(row: &rusqlite::Row) -> rusqlite::Result<OfficialResult> {
    Ok(OfficialResult {
        id: row.get(0)?,
        category_id: row.get(1)?,
        athlete_id: row.get(2)?,
        position: row.get(3)?,
        medal: optional_text_enum(row, 4, Medal::parse)?,
        points: row.get(5)?,
        status: text_enum(row, 6, ResultStatus::parse)?,
        recorded_at: row.get(7)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<OfficialResult>> {
    let sql = format!("SELECT {} FROM official_results r WHERE r.id = ?1", RESULT_COLUMNS);

    conn.query_row(&sql, params![id], parse_result_row)
        .optional()
        .context("Failed to query official result by id")
}

/// Status changes are the only update; a result moved out of `official`
/// drops out of the next standings computation.
pub fn update_status(conn: &mut DbConn, id: i64, status: ResultStatus) -> Result<bool> {
    let updated = conn
        .execute(
            "UPDATE official_results SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )
        .context("Failed to update official result status")?;
    Ok(updated > 0)
}

pub fn list_by_category(conn: &mut DbConn, category_id: CategoryId) -> Result<Vec<OfficialResult>> {
    let sql = format!(
        "SELECT {} FROM official_results r WHERE r.category_id = ?1 ORDER BY r.position ASC, r.id ASC",
        RESULT_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![category_id], parse_result_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Every result of a tournament regardless of status.
pub fn list_by_tournament(
    conn: &mut DbConn,
    tournament_id: TournamentId,
) -> Result<Vec<OfficialResult>> {
    let sql = format!(
        "SELECT {} FROM official_results r JOIN categories c ON c.id = r.category_id WHERE c.tournament_id = ?1 ORDER BY r.category_id ASC, r.position ASC, r.id ASC",
        RESULT_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_result_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
