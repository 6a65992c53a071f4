pub mod classification;

pub use classification::{HighestRanking, RoundResult};

use anyhow::Result;
use rusqlite::Connection;

use crate::database::{enrollments, matches};

/// Derives the best tournament result for a player from the match table,
/// falling back to enrollment data when the player has not played yet.
///
/// Pure with respect to the store: reads only, deterministic for a given
/// database state.
pub fn derive_highest_ranking(conn: &Connection, player_id: i64) -> Result<HighestRanking> {
    if let Some(best) = matches::find_best_match(conn, player_id)? {
        let result = RoundResult::classify(best.round_level, best.winner_id, player_id);
        log::debug!(
            "Player {player_id} best match: round level {} at {}",
            best.round_level,
            best.club_name
        );
        return Ok(HighestRanking::Placed {
            club_name: best.club_name,
            result,
        });
    }

    match enrollments::first_enrolled_club(conn, player_id)? {
        Some(club_name) => Ok(HighestRanking::EnrolledWithoutMatches { club_name }),
        None => Ok(HighestRanking::Unranked),
    }
}
