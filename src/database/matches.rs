use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::BestMatchRow;

/// Match with the lowest round level the player appeared in, joined with the
/// owning tournament's club name. Round level 1 is the final; larger numbers
/// are earlier rounds. Ties fall to whichever row the store returns first.
pub fn find_best_match(conn: &Connection, player_id: i64) -> Result<Option<BestMatchRow>> {
    let sql = "SELECT t.club_name, m.round_level, m.winner_id
         FROM matches m
         JOIN tournaments t ON m.tournament_id = t.id
         WHERE m.player1_id = ?1 OR m.player2_id = ?1
         ORDER BY m.round_level ASC
         LIMIT 1";

    conn.query_row(sql, params![player_id], parse_best_match_row)
        .optional()
        .context("Failed to query best match for player")
}

fn parse_best_match_row(row: &rusqlite::Row) -> rusqlite::Result<BestMatchRow> {
    Ok(BestMatchRow {
        club_name: row.get(0)?,
        round_level: row.get(1)?,
        winner_id: row.get(2)?,
    })
}
