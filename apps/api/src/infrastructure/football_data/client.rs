use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::domain::competition::{MatchListPayload, TeamDetails, TeamListPayload};
use crate::domain::repositories::{ClientError, CompetitionSource};

/// Header carrying the football-data.org API key (`X-Auth-Token`)
pub const AUTH_HEADER: &str = "x-auth-token";

/// football-data.org v4 adapter for [`CompetitionSource`]
///
/// Cloning is cheap; the underlying connection pool is shared. No timeout
/// is configured beyond the transport default and nothing is retried.
#[derive(Debug, Clone)]
pub struct FootballDataClient {
    http: Client,
    base_url: String,
}

impl FootballDataClient {
    /// Creates a client for `base_url` (e.g. `https://api.football-data.org`)
    ///
    /// # Returns
    /// * `Err(ClientError::Unavailable)` - when the API key is not a valid
    ///   header value or the HTTP client cannot be built
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut token = HeaderValue::from_str(api_key)
            .map_err(|e| ClientError::Unavailable(format!("invalid API key header: {}", e)))?;
        token.set_sensitive(true);
        headers.insert(AUTH_HEADER, token);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "External API unreachable");
            ClientError::Unavailable(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "External API returned an error");
            return Err(classify_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Maps a non-200 status to its failure kind
pub fn classify_status(status: StatusCode) -> ClientError {
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound,
        StatusCode::FORBIDDEN => ClientError::Forbidden,
        other => ClientError::UpstreamError {
            status_code: other.as_u16(),
        },
    }
}

#[async_trait]
impl CompetitionSource for FootballDataClient {
    async fn fetch_competition_teams(
        &self,
        competition_code: &str,
    ) -> Result<TeamListPayload, ClientError> {
        self.get_json(&format!("/v4/competitions/{}/teams", competition_code))
            .await
    }

    async fn fetch_team_details(&self, team_id: i64) -> Result<TeamDetails, ClientError> {
        self.get_json(&format!("/v4/teams/{}", team_id)).await
    }

    async fn fetch_team_matches(&self, team_id: i64) -> Result<MatchListPayload, ClientError> {
        self.get_json(&format!("/v4/teams/{}/matches", team_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(classify_status(StatusCode::NOT_FOUND), ClientError::NotFound);
        assert_eq!(classify_status(StatusCode::FORBIDDEN), ClientError::Forbidden);
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            ClientError::UpstreamError { status_code: 429 }
        );
        assert_eq!(
            classify_status(StatusCode::NO_CONTENT),
            ClientError::UpstreamError { status_code: 204 }
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = FootballDataClient::new("https://api.football-data.org/", "key").unwrap();
        assert_eq!(client.base_url(), "https://api.football-data.org");
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let result = FootballDataClient::new("http://localhost", "bad\nkey");
        assert!(matches!(result, Err(ClientError::Unavailable(_))));
    }
}
