pub mod config;
pub mod database;
pub mod errors;
pub mod ranking;
pub mod repository;

pub use config::{AppConfig, DatabaseSettings};
pub use database::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use errors::{RepositoryError, RepositoryResult};
pub use ranking::{HighestRanking, RoundResult};
pub use repository::{PlayerRepository, SqlitePlayerRepository};
