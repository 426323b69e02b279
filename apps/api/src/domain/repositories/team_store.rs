use async_trait::async_trait;

use super::StoreError;
use crate::domain::team::{Team, TeamPayload};

/// Local cache of teams fetched from the competition-data API
///
/// The store exclusively owns persistence. Each `upsert` runs as its own
/// transaction; nothing spans a whole sync batch, so a failure midway
/// leaves earlier upserts committed.
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Find a cached team by its upstream identifier
    async fn find_by_external_id(&self, external_id: i64) -> Result<Option<Team>, StoreError>;

    /// All cached teams, ordered by local id ascending
    async fn list_all(&self) -> Result<Vec<Team>, StoreError>;

    /// Insert the payload as a new team, or overwrite the one with the same
    /// external id (see [`crate::domain::team::TeamChanges`] for merge rules)
    async fn upsert(&self, payload: &TeamPayload) -> Result<Team, StoreError>;
}
