use async_trait::async_trait;
use thiserror::Error;

use crate::domain::competition::{MatchListPayload, TeamDetails, TeamListPayload};

/// Failures of the competition-data API, classified by cause
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Resource not found")]
    NotFound,

    #[error("Access forbidden - check API key")]
    Forbidden,

    #[error("External API unavailable: {0}")]
    Unavailable(String),

    #[error("External API error: {status_code}")]
    UpstreamError { status_code: u16 },

    #[error("Invalid response from external API: {0}")]
    Decode(String),
}

/// Read-only access to the upstream competition-data API
///
/// One request per call, no retries.
#[async_trait]
pub trait CompetitionSource: Send + Sync {
    /// Teams registered in a competition, e.g. `BSA`
    async fn fetch_competition_teams(
        &self,
        competition_code: &str,
    ) -> Result<TeamListPayload, ClientError>;

    /// Full record of one team, squad and coach included
    async fn fetch_team_details(&self, team_id: i64) -> Result<TeamDetails, ClientError>;

    /// Fixtures and results of one team
    async fn fetch_team_matches(&self, team_id: i64) -> Result<MatchListPayload, ClientError>;
}
