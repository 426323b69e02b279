use axum::extract::FromRef;
use chrono::Duration;
use sqlx::PgPool;

use crate::infrastructure::football_data::FootballDataClient;
use crate::infrastructure::repositories::{PostgresTeamStore, PostgresUserRepository};
use crate::services::{IndicatorEngine, TeamSyncService};

/// Token signing settings used by login and the bearer extractor
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

/// Shared handles cloned into every request
///
/// Holds no mutable state; services are assembled per request from these.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub football: FootballDataClient,
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(pool: PgPool, football: FootballDataClient, auth: AuthSettings) -> Self {
        Self {
            pool,
            football,
            auth,
        }
    }

    pub fn team_sync(&self) -> TeamSyncService<PostgresTeamStore, FootballDataClient> {
        TeamSyncService::new(
            PostgresTeamStore::new(self.pool.clone()),
            self.football.clone(),
        )
    }

    pub fn indicators(&self) -> IndicatorEngine<PostgresTeamStore> {
        IndicatorEngine::new(PostgresTeamStore::new(self.pool.clone()))
    }

    pub fn users(&self) -> PostgresUserRepository {
        PostgresUserRepository::new(self.pool.clone())
    }
}

impl FromRef<AppState> for AuthSettings {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
