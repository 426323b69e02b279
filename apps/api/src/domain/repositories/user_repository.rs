use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::StoreError;
use crate::domain::user::value_objects::{Email, Username};

/// User account as persisted
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: Username,
    pub email: Email,
    pub password_hash: String,
    pub team_favorite: String,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    async fn create(&self, user: User) -> Result<Uuid, StoreError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Find a user by login handle
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError>;
}
