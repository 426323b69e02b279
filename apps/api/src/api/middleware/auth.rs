use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AuthSettings;
use crate::auth::jwt::verify_token;

/// JWT authentication extractor for protected routes
///
/// Yields the user id carried in the token subject. Whether that user
/// still exists is left to the handler.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     JwtAuth(user_id): JwtAuth,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello user {}", user_id))
/// }
/// ```
pub struct JwtAuth(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    AuthSettings: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

        // Extract bearer token
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        let settings = AuthSettings::from_ref(state);

        let claims = verify_token(token, &settings.jwt_secret)
            .map_err(|_| ApiError::unauthorized("Could not validate credentials"))?;

        Ok(JwtAuth(claims.sub))
    }
}
