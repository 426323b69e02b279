use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{system, teams, users};
use super::state::AppState;

/// Builds the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health_check))
        // Team data
        .route("/teams/brasileirao", get(teams::list_teams))
        .route("/teams/:team_id", get(teams::get_team_details))
        .route("/teams/:team_id/matches", get(teams::get_team_matches))
        .route("/importar", post(system::import_data))
        .route("/indicadores", get(system::indicators))
        // Accounts
        .route("/users/signup", post(users::signup))
        .route("/users/login", post(users::login))
        .route("/users/me", get(users::me))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the given origins; invalid origins are skipped with a warning
///
/// Credentials are allowed, so methods and headers mirror the request
/// instead of using a wildcard.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
