use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::competition::{MatchListPayload, TeamDetails, TeamsListResponse};
use crate::services::CachePolicy;

/// Query string of the listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListTeamsParams {
    #[serde(default)]
    pub force_refresh: bool,
}

/// List Brasileirão teams, from cache unless a refresh is forced
///
/// GET /teams/brasileirao?force_refresh=true
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<ListTeamsParams>,
) -> Result<Json<TeamsListResponse>, ApiError> {
    let policy = CachePolicy::from_force_refresh(params.force_refresh);
    let listing = state.team_sync().get_teams(policy).await?;

    Ok(Json(listing))
}

/// Get the upstream details of a team by its external id
///
/// GET /teams/:team_id
pub async fn get_team_details(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<TeamDetails>, ApiError> {
    let details = state.team_sync().get_team_details(team_id).await?;

    Ok(Json(details))
}

/// Get the fixtures of a team by its external id
///
/// GET /teams/:team_id/matches
pub async fn get_team_matches(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<MatchListPayload>, ApiError> {
    let matches = state.team_sync().get_team_matches(team_id).await?;

    Ok(Json(matches))
}
