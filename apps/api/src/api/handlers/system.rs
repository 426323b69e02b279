use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::errors::SoftError;
use crate::api::state::AppState;
use crate::services::ServiceError;

/// Body returned by the indicator endpoint while the cache is empty
#[derive(Debug, Serialize)]
pub struct NoDataResponse {
    pub message: String,
    pub total_teams: usize,
    pub timestamp: DateTime<Utc>,
}

/// Re-import the competition from football-data.org into the local cache
///
/// POST /importar
///
/// Failures are reported in a 200 body, never as an error status.
pub async fn import_data(State(state): State<AppState>) -> Response {
    match state.team_sync().import_fresh_data().await {
        Ok(result) => Json(result).into_response(),
        Err(e) => SoftError::new("Erro ao importar dados", e).into_response(),
    }
}

/// Founding-year statistics over the cached teams
///
/// GET /indicadores
///
/// Failures are reported in a 200 body, never as an error status.
pub async fn indicators(State(state): State<AppState>) -> Response {
    match state.indicators().compute_indicators().await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e @ ServiceError::NoDataYet) => Json(NoDataResponse {
            message: e.to_string(),
            total_teams: 0,
            timestamp: Utc::now(),
        })
        .into_response(),
        Err(e) => SoftError::new("Erro ao calcular indicadores", e).into_response(),
    }
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "API online" }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
