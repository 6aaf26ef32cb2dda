use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::{Athlete, Team, TeamId};

pub fn insert_team(conn: &mut DbConn, name: &str) -> Result<Team> {
    let sql = "INSERT INTO teams (name) VALUES (?1) RETURNING id, name";

    conn.query_row(sql, params![name], parse_team_row)
        .context("Failed to insert team")
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn list_teams(conn: &mut DbConn) -> Result<Vec<Team>> {
    let mut stmt = conn.prepare("SELECT id, name FROM teams ORDER BY id")?;
    let rows = stmt
        .query_map([], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn insert_athlete(
    conn: &mut DbConn,
    name: &str,
    team_id: Option<TeamId>,
    age: u32,
) -> Result<Athlete> {
    let sql = "INSERT INTO athletes (name, team_id, age) VALUES (?1, ?2, ?3) RETURNING id, name, team_id, age";

    conn.query_row(sql, params![name, team_id, age], parse_athlete_row)
        .context("Failed to insert athlete")
}

fn parse_athlete_row(row: &rusqlite::Row) -> rusqlite::Result<Athlete> {
    Ok(Athlete {
        id: row.get(0)?,
        name: row.get(1)?,
        team_id: row.get(2)?,
        age: row.get(3)?,
    })
}

pub fn list_athletes(conn: &mut DbConn) -> Result<Vec<Athlete>> {
    let mut stmt = conn.prepare("SELECT id, name, team_id, age FROM athletes ORDER BY id")?;
    let rows = stmt
        .query_map([], parse_athlete_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn assign_team(conn: &mut DbConn, athlete_id: i64, team_id: Option<TeamId>) -> Result<bool> {
    let updated = conn
        .execute(
            "UPDATE athletes SET team_id = ?1 WHERE id = ?2",
            params![team_id, athlete_id],
        )
        .context("Failed to update athlete team")?;
    Ok(updated > 0)
}
