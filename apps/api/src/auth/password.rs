// Password hashing utilities
// Uses bcrypt for secure password hashing

use bcrypt::{hash, verify, DEFAULT_COST};

use super::AuthError;

/// Hashes a password using bcrypt
///
/// # Example
/// ```
/// use brasileirao_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password").expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verifies a password against a bcrypt hash
///
/// # Returns
/// * `Ok(bool)` - True if password matches, false otherwise
/// * `Err(AuthError)` - If the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    Ok(verify(password, hash)?)
}
