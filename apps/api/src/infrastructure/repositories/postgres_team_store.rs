use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::domain::repositories::{StoreError, TeamStore};
use crate::domain::team::{Team, TeamChanges, TeamPayload};

const TEAM_COLUMNS: &str = "id, external_id, name, short_name, tla, crest, area, founded, \
                            club_colors, venue, website, created_at, updated_at";

#[derive(Debug, FromRow)]
struct TeamRow {
    id: i64,
    external_id: i64,
    name: String,
    short_name: Option<String>,
    tla: Option<String>,
    crest: Option<String>,
    area: Option<String>,
    founded: Option<i32>,
    club_colors: Option<String>,
    venue: Option<String>,
    website: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(
            r.id,
            r.external_id,
            r.name,
            r.short_name,
            r.tla,
            r.crest,
            r.area,
            r.founded,
            r.club_colors,
            r.venue,
            r.website,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL implementation of TeamStore
///
/// Each upsert locks the row for its external id inside one transaction.
/// Two syncs inserting the same new team concurrently resolve through
/// `ON CONFLICT`, so the last commit wins.
#[derive(Clone)]
pub struct PostgresTeamStore {
    pool: PgPool,
}

impl PostgresTeamStore {
    /// Creates a new PostgresTeamStore
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamStore for PostgresTeamStore {
    async fn find_by_external_id(&self, external_id: i64) -> Result<Option<Team>, StoreError> {
        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {} FROM teams WHERE external_id = $1",
            TEAM_COLUMNS
        ))
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Team::from))
    }

    async fn list_all(&self) -> Result<Vec<Team>, StoreError> {
        let rows = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {} FROM teams ORDER BY id ASC",
            TEAM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn upsert(&self, payload: &TeamPayload) -> Result<Team, StoreError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let existing = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {} FROM teams WHERE external_id = $1 FOR UPDATE",
            TEAM_COLUMNS
        ))
        .bind(payload.id)
        .fetch_optional(&mut *tx)
        .await?;

        let row = match existing {
            Some(row) => {
                let current = Team::from(row);
                let changes = TeamChanges::for_existing(payload, &current);
                let updated_at = now.max(current.updated_at());

                sqlx::query_as::<_, TeamRow>(&format!(
                    r#"
                    UPDATE teams SET
                        name = $2, short_name = $3, tla = $4, crest = $5, area = $6,
                        founded = $7, club_colors = $8, venue = $9, website = $10,
                        updated_at = $11
                    WHERE id = $1
                    RETURNING {}
                    "#,
                    TEAM_COLUMNS
                ))
                .bind(current.id())
                .bind(changes.name)
                .bind(changes.short_name)
                .bind(changes.tla)
                .bind(changes.crest)
                .bind(changes.area)
                .bind(changes.founded)
                .bind(changes.club_colors)
                .bind(changes.venue)
                .bind(changes.website)
                .bind(updated_at)
                .fetch_one(&mut *tx)
                .await?
            }
            None => {
                let changes = TeamChanges::for_new(payload)?;

                sqlx::query_as::<_, TeamRow>(&format!(
                    r#"
                    INSERT INTO teams (
                        external_id, name, short_name, tla, crest, area,
                        founded, club_colors, venue, website, created_at, updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
                    ON CONFLICT (external_id) DO UPDATE SET
                        name = EXCLUDED.name,
                        short_name = EXCLUDED.short_name,
                        tla = EXCLUDED.tla,
                        crest = EXCLUDED.crest,
                        area = EXCLUDED.area,
                        founded = EXCLUDED.founded,
                        club_colors = EXCLUDED.club_colors,
                        venue = EXCLUDED.venue,
                        website = EXCLUDED.website,
                        updated_at = GREATEST(teams.updated_at, EXCLUDED.updated_at)
                    RETURNING {}
                    "#,
                    TEAM_COLUMNS
                ))
                .bind(payload.id)
                .bind(changes.name)
                .bind(changes.short_name)
                .bind(changes.tla)
                .bind(changes.crest)
                .bind(changes.area)
                .bind(changes.founded)
                .bind(changes.club_colors)
                .bind(changes.venue)
                .bind(changes.website)
                .bind(now)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;

        Ok(Team::from(row))
    }
}
