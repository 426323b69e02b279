use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, verify_password};
use crate::domain::repositories::user_repository::{User, UserRepository};
use crate::domain::repositories::StoreError;
use crate::domain::user::value_objects::{Email, Username};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 100;
pub const MIN_TEAM_FAVORITE_LEN: usize = 3;
pub const MAX_TEAM_FAVORITE_LEN: usize = 20;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub team_favorite: String,
}

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user account
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub team_favorite: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.to_string(),
            email: user.email.to_string(),
            team_favorite: user.team_favorite.clone(),
        }
    }
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

fn duplicate_error(column: &str) -> ApiError {
    match column {
        "email" => ApiError::bad_request("Email already exists"),
        _ => ApiError::bad_request("Username already exists"),
    }
}

/// Register a new user
///
/// POST /users/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let username = Username::new(&req.username).map_err(ApiError::bad_request)?;
    let email = Email::new(&req.email).map_err(ApiError::bad_request)?;

    let password_len = req.password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&password_len) {
        return Err(ApiError::bad_request(format!(
            "Password must be between {} and {} characters",
            MIN_PASSWORD_LEN, MAX_PASSWORD_LEN
        )));
    }

    let team_favorite = req.team_favorite.trim().to_string();
    let favorite_len = team_favorite.chars().count();
    if !(MIN_TEAM_FAVORITE_LEN..=MAX_TEAM_FAVORITE_LEN).contains(&favorite_len) {
        return Err(ApiError::bad_request(format!(
            "Favorite team must be between {} and {} characters",
            MIN_TEAM_FAVORITE_LEN, MAX_TEAM_FAVORITE_LEN
        )));
    }

    let user_repo = state.users();

    if user_repo
        .find_by_username(&username)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .is_some()
    {
        return Err(duplicate_error("username"));
    }

    if user_repo
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .is_some()
    {
        return Err(duplicate_error("email"));
    }

    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: Uuid::new_v4(),
        username,
        email,
        password_hash,
        team_favorite,
        created_at: Utc::now(),
    };

    user_repo.create(user.clone()).await.map_err(|e| match e {
        // Lost a race with a concurrent signup
        StoreError::Duplicate(column) => duplicate_error(column),
        e => ApiError::internal_server_error(format!("Failed to create user: {}", e)),
    })?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// Login with username and password
///
/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let invalid = || ApiError::unauthorized("Incorrect username or password");

    // A malformed username cannot belong to any account
    let username = Username::new(&req.username).map_err(|_| invalid())?;

    let user = state
        .users()
        .find_by_username(&username)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(invalid)?;

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(invalid());
    }

    let access_token = create_token(user.id, &state.auth.jwt_secret, state.auth.token_ttl)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Current user, resolved from the bearer token
///
/// GET /users/me
pub async fn me(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users()
        .find_by_id(user_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::unauthorized("Could not validate credentials"))?;

    Ok(Json(UserResponse::from(&user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_columns_map_to_signup_messages() {
        let username = duplicate_error("username");
        assert_eq!(username.status, StatusCode::BAD_REQUEST);
        assert_eq!(username.message, "Username already exists");

        let email = duplicate_error("email");
        assert_eq!(email.status, StatusCode::BAD_REQUEST);
        assert_eq!(email.message, "Email already exists");
    }
}
