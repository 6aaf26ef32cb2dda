use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use crate::config::TournamentRules;
use crate::domain::{Tournament, TournamentId};

pub fn insert_tournament(
    conn: &mut DbConn,
    name: &str,
    team_championship_enabled: bool,
    rules: &TournamentRules,
) -> Result<Tournament> {
    let rules_json = rules.to_json()?;
    let sql = "INSERT INTO tournaments (name, team_championship_enabled, rules_json) VALUES (?1, ?2, ?3) RETURNING id, name, team_championship_enabled";

    conn.query_row(
        sql,
        params![name, team_championship_enabled, rules_json],
        parse_tournament_row,
    )
    .context("Failed to insert tournament")
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        team_championship_enabled: row.get(2)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: TournamentId) -> Result<Option<Tournament>> {
    let sql = "SELECT id, name, team_championship_enabled FROM tournaments WHERE id = ?1";

    conn.query_row(sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn find_rules(conn: &mut DbConn, id: TournamentId) -> Result<Option<TournamentRules>> {
    let sql = "SELECT rules_json FROM tournaments WHERE id = ?1";

    let rules_json: Option<String> = conn
        .query_row(sql, params![id], |row| row.get(0))
        .optional()
        .context("Failed to query tournament rules")?;

    rules_json
        .map(|json| TournamentRules::from_json(&json))
        .transpose()
}

pub fn update_rules(conn: &mut DbConn, id: TournamentId, rules: &TournamentRules) -> Result<bool> {
    let rules_json = rules.to_json()?;
    let updated = conn
        .execute(
            "UPDATE tournaments SET rules_json = ?1 WHERE id = ?2",
            params![rules_json, id],
        )
        .context("Failed to update tournament rules")?;
    Ok(updated > 0)
}
