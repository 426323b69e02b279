use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use brasileirao_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("torcedor@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "torcedor@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    fn is_valid(email: &str) -> bool {
        email.contains('@') && email.len() >= 3
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login handle chosen at signup
///
/// # Invariants
/// - 3 to 20 characters
/// - ASCII letters, digits and underscore only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 20;

    /// Creates a new Username value object
    ///
    /// # Example
    /// ```
    /// use brasileirao_api::domain::user::value_objects::Username;
    ///
    /// assert!(Username::new("tricolor_1902").is_ok());
    /// assert!(Username::new("no spaces").is_err());
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, String> {
        let username = username.into();
        let len = username.chars().count();

        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(format!(
                "Username must be between {} and {} characters",
                Self::MIN_LEN,
                Self::MAX_LEN
            ));
        }

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err("Username may only contain letters, digits and underscore".to_string());
        }

        Ok(Username(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
