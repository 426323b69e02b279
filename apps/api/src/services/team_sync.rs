use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::{ServiceError, ServiceResult};
use crate::domain::competition::{MatchListPayload, TeamDetails, TeamsListResponse};
use crate::domain::repositories::{CompetitionSource, TeamStore};

/// Competition synced by the service
pub const BRASILEIRAO_CODE: &str = "BSA";

/// Competition name reported when upstream omits it
pub const FALLBACK_COMPETITION_NAME: &str = "Brasileirão Série A";

/// Source label reported by imports
pub const IMPORT_SOURCE: &str = "football-data.org API";

/// Whether a listing may be served from the local cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Serve cached teams; fetch only when the cache is empty
    PreferCache,
    /// Always fetch upstream and refresh the cache
    ForceRefresh,
}

impl CachePolicy {
    pub fn from_force_refresh(force_refresh: bool) -> Self {
        if force_refresh {
            CachePolicy::ForceRefresh
        } else {
            CachePolicy::PreferCache
        }
    }
}

/// Outcome of one import run; never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportResult {
    pub message: String,
    #[serde(rename = "fonte")]
    pub source: String,
    pub competition: String,
    #[serde(rename = "teams_novos")]
    pub created: usize,
    #[serde(rename = "teams_atualizados")]
    pub updated: usize,
    #[serde(rename = "total_processados")]
    pub total: usize,
    pub timestamp: DateTime<Utc>,
}

/// Fetch-then-upsert orchestration between the upstream API and the cache
///
/// Stateless apart from its two collaborators; build one per request.
pub struct TeamSyncService<S, C> {
    store: S,
    source: C,
}

impl<S, C> TeamSyncService<S, C>
where
    S: TeamStore,
    C: CompetitionSource,
{
    pub fn new(store: S, source: C) -> Self {
        Self { store, source }
    }

    /// Lists Brasileirão teams according to `policy`
    ///
    /// The cache path rebuilds a listing with fixed competition metadata;
    /// the refresh path returns the upstream listing as fetched, after
    /// upserting every team.
    pub async fn get_teams(&self, policy: CachePolicy) -> ServiceResult<TeamsListResponse> {
        if policy == CachePolicy::PreferCache {
            let cached = self
                .store
                .list_all()
                .await
                .map_err(|e| ServiceError::from(e).context("Error fetching teams"))?;

            if !cached.is_empty() {
                tracing::debug!(count = cached.len(), "Serving teams from cache");
                return Ok(TeamsListResponse::from_cache(&cached));
            }

            tracing::info!("Team cache is empty, fetching from upstream");
        }

        let payload = self
            .source
            .fetch_competition_teams(BRASILEIRAO_CODE)
            .await
            .map_err(|e| ServiceError::from(e).context("Error fetching teams"))?;

        for team in &payload.teams {
            self.store
                .upsert(team)
                .await
                .map_err(|e| ServiceError::from(e).context("Error fetching teams"))?;
        }

        tracing::info!(count = payload.teams.len(), "Refreshed team cache");

        Ok(TeamsListResponse::from(payload))
    }

    /// Fetches the competition and upserts every team, counting new vs updated
    ///
    /// A team counts as updated when it was cached before its own upsert.
    pub async fn import_fresh_data(&self) -> ServiceResult<ImportResult> {
        self.import().await.map_err(|e| e.context("Error importing fresh data"))
    }

    async fn import(&self) -> ServiceResult<ImportResult> {
        let payload = self.source.fetch_competition_teams(BRASILEIRAO_CODE).await?;

        let mut created = 0;
        let mut updated = 0;

        for team in &payload.teams {
            let existed = self.store.find_by_external_id(team.id).await?.is_some();
            self.store.upsert(team).await?;

            if existed {
                updated += 1;
            } else {
                created += 1;
            }
        }

        let competition = payload
            .competition
            .map(|c| c.name)
            .unwrap_or_else(|| FALLBACK_COMPETITION_NAME.to_string());

        tracing::info!(
            %competition,
            created,
            updated,
            "Imported fresh team data"
        );

        Ok(ImportResult {
            message: "Dados importados com sucesso".to_string(),
            source: IMPORT_SOURCE.to_string(),
            competition,
            created,
            updated,
            total: created + updated,
            timestamp: Utc::now(),
        })
    }

    /// Full upstream record of one team; never cached
    pub async fn get_team_details(&self, team_id: i64) -> ServiceResult<TeamDetails> {
        self.source
            .fetch_team_details(team_id)
            .await
            .map_err(|e| ServiceError::from(e).context("Error fetching team details"))
    }

    /// Upstream fixtures of one team; never cached
    pub async fn get_team_matches(&self, team_id: i64) -> ServiceResult<MatchListPayload> {
        self.source
            .fetch_team_matches(team_id)
            .await
            .map_err(|e| ServiceError::from(e).context("Error fetching team matches"))
    }
}
