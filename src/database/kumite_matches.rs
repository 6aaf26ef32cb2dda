use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::columns::{json_column, text_enum};
use super::connection::DbConn;
use crate::domain::{KumiteMatch, MatchStatus, ResultStatus};

const MATCH_COLUMNS: &str = "id, category_id, athlete1_id, athlete2_id, athlete1_points, athlete2_points, athlete1_penalties, athlete2_penalties, match_duration, elapsed_time, winner_id, status, result_status";

pub fn insert_match(conn: &mut DbConn, bout: &KumiteMatch) -> Result<KumiteMatch> {
    let (points1, points2) = encode_points(bout)?;
    let sql = format!(
        "INSERT INTO kumite_matches (category_id, athlete1_id, athlete2_id, athlete1_points, athlete2_points, athlete1_penalties, athlete2_penalties, match_duration, elapsed_time, winner_id, status, result_status) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12) RETURNING {}",
        MATCH_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            bout.category_id,
            bout.athlete1_id,
            bout.athlete2_id,
            points1,
            points2,
            bout.athlete1_penalties,
            bout.athlete2_penalties,
            bout.match_duration,
            bout.elapsed_time,
            bout.winner_id,
            bout.status.as_str(),
            bout.result_status.as_str(),
        ],
        parse_match_row,
    )
    .context("Failed to insert kumite match")
}

/// Overwrites the stored bout state with the referee client's latest copy.
pub fn save_match(conn: &mut DbConn, bout: &KumiteMatch) -> Result<bool> {
    let (points1, points2) = encode_points(bout)?;
    let sql = "UPDATE kumite_matches SET athlete1_points = ?1, athlete2_points = ?2, athlete1_penalties = ?3, athlete2_penalties = ?4, elapsed_time = ?5, winner_id = ?6, status = ?7, result_status = ?8 WHERE id = ?9";

    let updated = conn
        .execute(
            sql,
            params![
                points1,
                points2,
                bout.athlete1_penalties,
                bout.athlete2_penalties,
                bout.elapsed_time,
                bout.winner_id,
                bout.status.as_str(),
                bout.result_status.as_str(),
                bout.id,
            ],
        )
        .context("Failed to save kumite match")?;
    Ok(updated > 0)
}

fn encode_points(bout: &KumiteMatch) -> Result<(String, String)> {
    let points1 = serde_json::to_string(&bout.athlete1_points)
        .context("Failed to serialize athlete 1 points")?;
    let points2 = serde_json::to_string(&bout.athlete2_points)
        .context("Failed to serialize athlete 2 points")?;
    Ok((points1, points2))
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<KumiteMatch> {
    Ok(KumiteMatch {
        id: row.get(0)?,
        category_id: row.get(1)?,
        athlete1_id: row.get(2)?,
        athlete2_id: row.get(3)?,
        athlete1_points: json_column(row, 4)?,
        athlete2_points: json_column(row, 5)?,
        athlete1_penalties: row.get(6)?,
        athlete2_penalties: row.get(7)?,
        match_duration: row.get(8)?,
        elapsed_time: row.get(9)?,
        winner_id: row.get(10)?,
        status: text_enum(row, 11, MatchStatus::parse)?,
        result_status: text_enum(row, 12, ResultStatus::parse)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<KumiteMatch>> {
    let sql = format!("SELECT {} FROM kumite_matches WHERE id = ?1", MATCH_COLUMNS);

    conn.query_row(&sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query kumite match by id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TournamentRules;
    use crate::database::categories::insert_category;
    use crate::database::roster::insert_athlete;
    use crate::database::test_support::fresh_connection;
    use crate::database::tournaments::insert_tournament;
    use crate::domain::EventType;
    use crate::scoring::{Competitor, KumitePoint};

    #[test]
    fn bout_state_survives_save_and_reload() {
        let (_pool, mut conn) = fresh_connection();
        let t = insert_tournament(&mut conn, "Open", true, &TournamentRules::default()).unwrap();
        let c = insert_category(&mut conn, t.id, "Kumite U18", EventType::Kumite, 16, 17).unwrap();
        let a1 = insert_athlete(&mut conn, "Taro", None, 16).unwrap();
        let a2 = insert_athlete(&mut conn, "Jiro", None, 17).unwrap();

        let mut bout = insert_match(&mut conn, &KumiteMatch::new(c.id, a1.id, a2.id, 120)).unwrap();
        bout.record_point(Competitor::Athlete1, KumitePoint::WazaAri);
        bout.record_point(Competitor::Athlete2, KumitePoint::Yuko);
        bout.record_penalty(Competitor::Athlete2);
        bout.tick(120);
        bout.apply_evaluation(true);
        assert!(save_match(&mut conn, &bout).unwrap());

        let reloaded = find_by_id(&mut conn, bout.id).unwrap().unwrap();
        assert_eq!(reloaded, bout);
        assert_eq!(reloaded.winner_id, Some(a1.id));
        assert_eq!(reloaded.status, MatchStatus::Completed);
    }
}
