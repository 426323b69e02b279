// JWT token creation and verification
// HS256 bearer tokens whose lifetime comes from configuration

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthError;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: Uuid,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Creates a JWT token for a user
///
/// # Arguments
/// * `user_id` - The user's ID to include in the token
/// * `secret` - The secret key for signing
/// * `ttl` - How long the token stays valid
///
/// # Example
/// ```
/// use brasileirao_api::auth::jwt::{create_token, verify_token};
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, "your-secret-key", Duration::minutes(30)).unwrap();
///
/// let claims = verify_token(&token, "your-secret-key").expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// ```
pub fn create_token(user_id: Uuid, secret: &str, ttl: Duration) -> Result<String, AuthError> {
    let expiry = Utc::now()
        .checked_add_signed(ttl)
        .ok_or(AuthError::ExpiryOutOfRange)?;
    let claims = Claims {
        sub: user_id,
        exp: expiry.timestamp().max(0) as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

/// Verifies and decodes a JWT token
///
/// # Returns
/// * `Ok(Claims)` - The decoded claims if token is valid
/// * `Err(AuthError)` - If token is invalid or expired
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}
