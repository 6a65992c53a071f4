use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Enrollment;

pub fn insert_enrollment(
    conn: &Connection,
    tournament_id: i64,
    player_id: i64,
) -> Result<()> {
    let sql = "INSERT INTO enrollments (player_id, tournament_id) VALUES (?1, ?2)";

    conn.execute(sql, params![player_id, tournament_id])
        .map(|_| ())
        .context("Failed to insert enrollment")
}

/// Returns the number of affected rows; zero means the enrollment did not
/// exist, which callers treat as a no-op.
pub fn delete_enrollment(
    conn: &Connection,
    tournament_id: i64,
    player_id: i64,
) -> Result<usize> {
    let sql = "DELETE FROM enrollments WHERE player_id = ?1 AND tournament_id = ?2";

    conn.execute(sql, params![player_id, tournament_id])
        .context("Failed to delete enrollment")
}

pub fn delete_all_for_player(conn: &Connection, player_id: i64) -> Result<usize> {
    let sql = "DELETE FROM enrollments WHERE player_id = ?1";

    conn.execute(sql, params![player_id])
        .context("Failed to delete enrollments for player")
}

pub fn list_for_player(conn: &Connection, player_id: i64) -> Result<Vec<Enrollment>> {
    let sql = "SELECT player_id, tournament_id, created_at FROM enrollments WHERE player_id = ?1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_enrollment_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Club name of any one tournament the player is enrolled in, used as the
/// ranking fallback when the player has not played a match yet.
pub fn first_enrolled_club(conn: &Connection, player_id: i64) -> Result<Option<String>> {
    let sql = "SELECT t.club_name
         FROM enrollments e
         JOIN tournaments t ON e.tournament_id = t.id
         WHERE e.player_id = ?1
         LIMIT 1";

    conn.query_row(sql, params![player_id], |row| row.get(0))
        .optional()
        .context("Failed to query enrolled club for player")
}

fn parse_enrollment_row(row: &rusqlite::Row) -> rusqlite::Result<Enrollment> {
    Ok(Enrollment {
        player_id: row.get(0)?,
        tournament_id: row.get(1)?,
        created_at: row.get(2)?,
    })
}
