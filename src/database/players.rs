use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;

// Statements take a plain `Connection` so they run both on pooled
// connections and inside an open `Transaction`.

pub fn insert_player(conn: &Connection, player: &Player) -> Result<()> {
    let sql = "INSERT INTO players (id, name, points) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![player.id, player.name, player.points])
        .map(|_| ())
        .context("Failed to insert player")
}

pub fn find_by_id(conn: &Connection, player_id: i64) -> Result<Option<Player>> {
    let sql = "SELECT id, name, points, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![player_id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, points, created_at FROM players";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Returns the number of affected rows; zero means no player had this id.
pub fn update_player(conn: &Connection, player: &Player) -> Result<usize> {
    let sql = "UPDATE players SET name = ?1, points = ?2 WHERE id = ?3";

    conn.execute(sql, params![player.name, player.points, player.id])
        .context("Failed to update player")
}

/// Returns the number of affected rows; zero means no player had this id.
pub fn delete_player(conn: &Connection, player_id: i64) -> Result<usize> {
    let sql = "DELETE FROM players WHERE id = ?1";

    conn.execute(sql, params![player_id])
        .context("Failed to delete player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        points: row.get(2)?,
        created_at: row.get(3)?,
    })
}
