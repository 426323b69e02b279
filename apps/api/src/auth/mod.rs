// Authentication primitives
// bcrypt password hashing and HS256 bearer tokens

pub mod jwt;
pub mod password;

use thiserror::Error;

/// Failures while hashing passwords or handling tokens
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Token lifetime is out of range")]
    ExpiryOutOfRange,
}
