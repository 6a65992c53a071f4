pub mod sqlite;

pub use sqlite::SqlitePlayerRepository;

use crate::database::models::Player;
use crate::errors::RepositoryResult;

/// Storage contract for player records and tournament enrollment. Every
/// backend implements the same semantics, so the shared test suite in
/// `sqlite.rs` applies to any implementation.
pub trait PlayerRepository {
    /// Inserts a new player. Fails with `DuplicatePlayer` when the id is
    /// already taken.
    fn add_player(&self, player: &Player) -> RepositoryResult<()>;

    /// Fails with `PlayerNotFound` when no player has this id.
    fn get_player(&self, player_id: i64) -> RepositoryResult<Player>;

    /// All players in store-native order; empty when none exist.
    fn list_players(&self) -> RepositoryResult<Vec<Player>>;

    /// Overwrites name and points of the player matching `player.id`. Fails
    /// with `PlayerNotFound` when no row matches; never inserts.
    fn update_player(&self, player: &Player) -> RepositoryResult<()>;

    /// Removes the player and all of their enrollments in one transaction.
    /// All-or-nothing: any failure rolls the whole operation back.
    fn delete_player(&self, player_id: i64) -> RepositoryResult<()>;

    /// Enrolls the player in a tournament. Enrolling the same pair twice is
    /// a constraint violation surfaced as `Storage`.
    fn enroll_player(&self, tournament_id: i64, player_id: i64) -> RepositoryResult<()>;

    /// Removes the enrollment if present; removing a non-existent enrollment
    /// is a no-op.
    fn withdraw_player(&self, tournament_id: i64, player_id: i64) -> RepositoryResult<()>;

    /// One-line summary of the player's best tournament result, derived from
    /// match and enrollment data.
    fn highest_ranking(&self, player_id: i64) -> RepositoryResult<String>;
}
