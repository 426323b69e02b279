use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::repositories::user_repository::{User, UserRepository};
use crate::domain::repositories::StoreError;
use crate::domain::user::value_objects::{Email, Username};

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    team_favorite: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: r.id,
            username: Username::new(r.username).map_err(StoreError::CorruptRow)?,
            email: Email::new(r.email).map_err(StoreError::CorruptRow)?,
            password_hash: r.password_hash,
            team_favorite: r.team_favorite,
            created_at: r.created_at,
        })
    }
}

/// Column behind a unique constraint of the `users` table
fn duplicate_column(constraint: Option<&str>) -> Option<&'static str> {
    match constraint? {
        "users_username_key" => Some("username"),
        "users_email_key" => Some("email"),
        _ => None,
    }
}

fn map_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            if let Some(column) = duplicate_column(db.constraint()) {
                return StoreError::Duplicate(column);
            }
        }
    }
    StoreError::Database(err)
}

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            SELECT id, username, email, password_hash, team_favorite, created_at
            FROM users
            WHERE {} = $1
            "#,
            column
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<Uuid, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, username, email, password_hash, team_favorite, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.team_favorite)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(user.id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, team_favorite, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError> {
        self.find_one("username", username.as_str()).await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError> {
        self.find_one("email", email.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_constraints_map_to_columns() {
        assert_eq!(duplicate_column(Some("users_username_key")), Some("username"));
        assert_eq!(duplicate_column(Some("users_email_key")), Some("email"));
        assert_eq!(duplicate_column(Some("users_pkey")), None);
        assert_eq!(duplicate_column(None), None);
    }

    #[test]
    fn other_errors_stay_database_errors() {
        assert!(matches!(
            map_insert_error(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        ));
    }
}
