use anyhow::Context;
use rusqlite::ErrorCode;

use super::PlayerRepository;
use crate::database::models::Player;
use crate::database::{connection, enrollments, players, DbConn, DbPool};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::ranking;

/// Canonical repository implementation over the pooled SQLite store.
pub struct SqlitePlayerRepository {
    pool: DbPool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConn> {
        Ok(connection::get_connection(&self.pool)?)
    }
}

impl PlayerRepository for SqlitePlayerRepository {
    fn add_player(&self, player: &Player) -> RepositoryResult<()> {
        let conn = self.conn()?;
        players::insert_player(&conn, player).map_err(|e| {
            if is_constraint_violation(&e) {
                RepositoryError::DuplicatePlayer(player.id)
            } else {
                RepositoryError::Storage(e)
            }
        })?;
        log::debug!("Added player {}", player.id);
        Ok(())
    }

    fn get_player(&self, player_id: i64) -> RepositoryResult<Player> {
        let conn = self.conn()?;
        players::find_by_id(&conn, player_id)?
            .ok_or(RepositoryError::PlayerNotFound(player_id))
    }

    fn list_players(&self) -> RepositoryResult<Vec<Player>> {
        let conn = self.conn()?;
        Ok(players::list_all(&conn)?)
    }

    fn update_player(&self, player: &Player) -> RepositoryResult<()> {
        let conn = self.conn()?;
        let affected = players::update_player(&conn, player)?;
        if affected == 0 {
            return Err(RepositoryError::PlayerNotFound(player.id));
        }
        Ok(())
    }

    fn delete_player(&self, player_id: i64) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let tx = conn
            .transaction()
            .context("Failed to begin delete transaction")?;

        // Enrollments reference the player row, so they go first. Dropping
        // the transaction without committing rolls both statements back.
        let removed = enrollments::delete_all_for_player(&tx, player_id)?;
        let affected = players::delete_player(&tx, player_id)?;
        if affected == 0 {
            return Err(RepositoryError::PlayerNotFound(player_id));
        }

        tx.commit().context("Failed to commit delete transaction")?;
        if removed > 0 {
            log::info!("Deleted player {player_id} and {removed} enrollments");
        } else {
            log::debug!("Deleted player {player_id}");
        }
        Ok(())
    }

    fn enroll_player(&self, tournament_id: i64, player_id: i64) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let tx = conn
            .transaction()
            .context("Failed to begin enroll transaction")?;
        enrollments::insert_enrollment(&tx, tournament_id, player_id)?;
        tx.commit().context("Failed to commit enroll transaction")?;
        log::debug!("Enrolled player {player_id} in tournament {tournament_id}");
        Ok(())
    }

    fn withdraw_player(&self, tournament_id: i64, player_id: i64) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let tx = conn
            .transaction()
            .context("Failed to begin withdraw transaction")?;
        let affected = enrollments::delete_enrollment(&tx, tournament_id, player_id)?;
        tx.commit().context("Failed to commit withdraw transaction")?;
        if affected == 0 {
            log::debug!(
                "No enrollment of player {player_id} in tournament {tournament_id} to withdraw"
            );
        }
        Ok(())
    }

    fn highest_ranking(&self, player_id: i64) -> RepositoryResult<String> {
        let conn = self.conn()?;
        let ranking = ranking::derive_highest_ranking(&conn, player_id)?;
        Ok(ranking.to_string())
    }
}

fn is_constraint_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup;
    use rusqlite::params;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn test_repository() -> SqlitePlayerRepository {
        INIT.call_once(|| {
            sensible_env_logger::init!();
        });
        let pool = connection::create_memory_pool().unwrap();
        {
            let mut conn = connection::get_connection(&pool).unwrap();
            setup::initialize_schema(&mut conn).unwrap();
        }
        SqlitePlayerRepository::new(pool)
    }

    fn player(id: i64, name: &str, points: i64) -> Player {
        Player {
            id,
            name: name.to_string(),
            points,
            created_at: None,
        }
    }

    fn seed_tournament(repo: &SqlitePlayerRepository, id: i64, club_name: &str) {
        let conn = connection::get_connection(&repo.pool).unwrap();
        conn.execute(
            "INSERT INTO tournaments (id, club_name) VALUES (?1, ?2)",
            params![id, club_name],
        )
        .unwrap();
    }

    #[test]
    fn test_add_then_get_round_trip() {
        let repo = test_repository();
        repo.add_player(&player(1001, "Kim Clijsters", 120)).unwrap();

        let found = repo.get_player(1001).unwrap();
        assert_eq!(found.id, 1001);
        assert_eq!(found.name, "Kim Clijsters");
        assert_eq!(found.points, 120);
    }

    #[test]
    fn test_duplicate_id_is_rejected_and_first_record_kept() {
        let repo = test_repository();
        repo.add_player(&player(1001, "Kim", 120)).unwrap();

        let err = repo.add_player(&player(1001, "Impostor", 5)).unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicatePlayer(1001)));

        let found = repo.get_player(1001).unwrap();
        assert_eq!(found.name, "Kim");
        assert_eq!(found.points, 120);
    }

    #[test]
    fn test_get_missing_player() {
        let repo = test_repository();
        let err = repo.get_player(404).unwrap_err();
        assert!(matches!(err, RepositoryError::PlayerNotFound(404)));
    }

    #[test]
    fn test_list_players_empty_and_filled() {
        let repo = test_repository();
        assert!(repo.list_players().unwrap().is_empty());

        repo.add_player(&player(1, "An", 10)).unwrap();
        repo.add_player(&player(2, "Bert", 20)).unwrap();

        let all = repo.list_players().unwrap();
        assert_eq!(all.len(), 2);
        let mut ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_update_overwrites_name_and_points() {
        let repo = test_repository();
        repo.add_player(&player(1, "An", 10)).unwrap();

        repo.update_player(&player(1, "An Peeters", 35)).unwrap();

        let found = repo.get_player(1).unwrap();
        assert_eq!(found.name, "An Peeters");
        assert_eq!(found.points, 35);
    }

    #[test]
    fn test_update_missing_player_creates_nothing() {
        let repo = test_repository();
        let err = repo.update_player(&player(404, "Ghost", 0)).unwrap_err();
        assert!(matches!(err, RepositoryError::PlayerNotFound(404)));
        assert!(repo.list_players().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_player() {
        let repo = test_repository();
        let err = repo.delete_player(404).unwrap_err();
        assert!(matches!(err, RepositoryError::PlayerNotFound(404)));
    }

    #[test]
    fn test_delete_cascades_enrollments() {
        let repo = test_repository();
        repo.add_player(&player(1, "An", 10)).unwrap();
        seed_tournament(&repo, 100, "Brugge");
        seed_tournament(&repo, 200, "Gent");
        repo.enroll_player(100, 1).unwrap();
        repo.enroll_player(200, 1).unwrap();

        repo.delete_player(1).unwrap();

        let conn = connection::get_connection(&repo.pool).unwrap();
        let remaining = enrollments::list_for_player(&conn, 1).unwrap();
        assert!(remaining.is_empty());
        drop(conn);
        assert!(matches!(
            repo.get_player(1).unwrap_err(),
            RepositoryError::PlayerNotFound(1)
        ));
    }

    #[test]
    fn test_enroll_duplicate_pair_is_storage_failure() {
        let repo = test_repository();
        repo.add_player(&player(1, "An", 10)).unwrap();
        seed_tournament(&repo, 100, "Brugge");
        repo.enroll_player(100, 1).unwrap();

        let err = repo.enroll_player(100, 1).unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));
    }

    #[test]
    fn test_withdraw_is_idempotent() {
        let repo = test_repository();
        repo.add_player(&player(1, "An", 10)).unwrap();
        seed_tournament(&repo, 100, "Brugge");

        // Withdrawing without an enrollment succeeds and changes nothing.
        repo.withdraw_player(100, 1).unwrap();

        repo.enroll_player(100, 1).unwrap();
        repo.withdraw_player(100, 1).unwrap();
        repo.withdraw_player(100, 1).unwrap();

        let conn = connection::get_connection(&repo.pool).unwrap();
        assert!(enrollments::list_for_player(&conn, 1).unwrap().is_empty());
    }

    #[test]
    fn test_highest_ranking_formats_best_result() {
        let repo = test_repository();
        repo.add_player(&player(1, "An", 10)).unwrap();
        seed_tournament(&repo, 100, "Brugge");
        let conn = connection::get_connection(&repo.pool).unwrap();
        conn.execute(
            "INSERT INTO matches (tournament_id, player1_id, player2_id, round_level, winner_id)
             VALUES (100, 1, 2, 1, 1)",
            [],
        )
        .unwrap();
        drop(conn);

        let summary = repo.highest_ranking(1).unwrap();
        assert_eq!(
            summary,
            "Hoogst geplaatst in het tornooi van Brugge met plaats in de winst"
        );
    }

    #[test]
    fn test_highest_ranking_enrollment_fallback() {
        let repo = test_repository();
        repo.add_player(&player(1, "An", 10)).unwrap();
        seed_tournament(&repo, 100, "Brugge");
        repo.enroll_player(100, 1).unwrap();

        let summary = repo.highest_ranking(1).unwrap();
        assert_eq!(
            summary,
            "Speler ingeschreven voor tornooi van Brugge maar geen wedstrijden gespeeld."
        );
    }

    #[test]
    fn test_highest_ranking_without_any_data() {
        let repo = test_repository();
        let summary = repo.highest_ranking(1).unwrap();
        assert_eq!(summary, "Speler heeft geen rankings.");
    }
}
