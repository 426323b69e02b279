// Ports the domain depends on
// Adapters live under crate::infrastructure

pub mod competition_source;
pub mod team_store;
pub mod user_repository;

pub use competition_source::{ClientError, CompetitionSource};
pub use team_store::TeamStore;
pub use user_repository::{User, UserRepository};

use thiserror::Error;

use crate::domain::team::TeamError;

/// Persistence failures shared by every store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    InvalidRecord(#[from] TeamError),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// A unique column already holds this value; carries the column name
    #[error("Duplicate {0}")]
    Duplicate(&'static str),
}
