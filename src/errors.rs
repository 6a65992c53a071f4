use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failure kinds of the player repository. Callers key behavior off the
/// variant, so these are never collapsed into a single opaque error.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested player does not exist.
    #[error("player with id {0} does not exist")]
    PlayerNotFound(i64),

    /// An insert collided with an existing player id.
    #[error("player with id {0} already exists")]
    DuplicatePlayer(i64),

    /// Any other data-store fault: connectivity, constraint violations not
    /// covered above, failed transactions.
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}
