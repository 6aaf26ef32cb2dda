use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::columns::text_enum;
use super::connection::DbConn;
use crate::domain::{Category, CategoryId, EventType, TournamentId};

pub fn insert_category(
    conn: &mut DbConn,
    tournament_id: TournamentId,
    name: &str,
    event_type: EventType,
    age_min: u32,
    age_max: u32,
) -> Result<Category> {
    let sql = "INSERT INTO categories (tournament_id, name, event_type, age_min, age_max) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, tournament_id, name, event_type, age_min, age_max";

    conn.query_row(
        sql,
        params![tournament_id, name, event_type.as_str(), age_min, age_max],
        parse_category_row,
    )
    .context("Failed to insert category")
}

fn parse_category_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        name: row.get(2)?,
        event_type: text_enum(row, 3, EventType::parse)?,
        age_min: row.get(4)?,
        age_max: row.get(5)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: CategoryId) -> Result<Option<Category>> {
    let sql = "SELECT id, tournament_id, name, event_type, age_min, age_max FROM categories WHERE id = ?1";

    conn.query_row(sql, params![id], parse_category_row)
        .optional()
        .context("Failed to query category by id")
}

pub fn list_by_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> Result<Vec<Category>> {
    let sql = "SELECT id, tournament_id, name, event_type, age_min, age_max FROM categories WHERE tournament_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_category_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
