use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use brasileirao_api::api::{build_router, cors_layer, AppState, AuthSettings};
use brasileirao_api::config::Settings;
use brasileirao_api::infrastructure::football_data::FootballDataClient;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().expect("Invalid configuration");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database connected successfully");

    let football = FootballDataClient::new(
        settings.football_api_base_url.clone(),
        &settings.football_api_key,
    )
    .expect("Failed to build football-data client");

    let state = AppState::new(
        pool,
        football,
        AuthSettings {
            jwt_secret: settings.jwt_secret.clone(),
            token_ttl: settings.token_ttl,
        },
    );

    let app = build_router(state, cors_layer(&settings.cors_origins));

    // Start server
    tracing::info!("Server listening on {}", settings.bind_addr);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
