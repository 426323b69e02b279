use super::payload::TeamPayload;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised while reconciling an upstream payload into a Team
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Team {external_id} has no name and no cached record to fall back on")]
    MissingName { external_id: i64 },
}

/// Team cached from the competition-data API
///
/// # Invariants
/// - `external_id` is unique and is the only key used for reconciliation
/// - `id` is a local surrogate key, never exposed as the team identifier
/// - `updated_at` is refreshed on every mutation and never precedes `created_at`
///
/// # Example
/// ```
/// use brasileirao_api::domain::team::{Team, TeamChanges, TeamPayload};
/// use chrono::Utc;
///
/// let payload = TeamPayload::named(1776, "São Paulo FC");
/// let changes = TeamChanges::for_new(&payload).expect("named payload");
/// let team = Team::create(1, payload.id, changes, Utc::now());
///
/// assert_eq!(team.external_id(), 1776);
/// assert_eq!(team.name(), "São Paulo FC");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
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

/// Mutable team fields resolved from a payload, ready to be written
///
/// Merge rules for an existing record: `name` keeps the cached value when
/// the payload omits it, every other field is overwritten as-is, including
/// with `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamChanges {
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest: Option<String>,
    pub area: Option<String>,
    pub founded: Option<i32>,
    pub club_colors: Option<String>,
    pub venue: Option<String>,
    pub website: Option<String>,
}

impl TeamChanges {
    /// Fields for a record that does not exist yet
    ///
    /// # Returns
    /// * `Err(TeamError::MissingName)` - name is non-nullable on insert
    pub fn for_new(payload: &TeamPayload) -> Result<Self, TeamError> {
        let name = payload.name.clone().ok_or(TeamError::MissingName {
            external_id: payload.id,
        })?;

        Ok(Self::with_name(name, payload))
    }

    /// Fields overwriting an already cached record
    pub fn for_existing(payload: &TeamPayload, existing: &Team) -> Self {
        let name = payload
            .name
            .clone()
            .unwrap_or_else(|| existing.name.clone());

        Self::with_name(name, payload)
    }

    fn with_name(name: String, payload: &TeamPayload) -> Self {
        Self {
            name,
            short_name: payload.short_name.clone(),
            tla: payload.tla.clone(),
            crest: payload.crest.clone(),
            area: payload.area_name(),
            founded: payload.founded,
            club_colors: payload.club_colors.clone(),
            venue: payload.venue.clone(),
            website: payload.website.clone(),
        }
    }
}

impl Team {
    /// Builds a freshly inserted record
    pub fn create(id: i64, external_id: i64, changes: TeamChanges, now: DateTime<Utc>) -> Self {
        Self {
            id,
            external_id,
            name: changes.name,
            short_name: changes.short_name,
            tla: changes.tla,
            crest: changes.crest,
            area: changes.area,
            founded: changes.founded,
            club_colors: changes.club_colors,
            venue: changes.venue,
            website: changes.website,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the mutable fields and bumps `updated_at`
    ///
    /// `updated_at` never moves backwards even if `now` lags behind it.
    pub fn apply(&mut self, changes: TeamChanges, now: DateTime<Utc>) {
        self.name = changes.name;
        self.short_name = changes.short_name;
        self.tla = changes.tla;
        self.crest = changes.crest;
        self.area = changes.area;
        self.founded = changes.founded;
        self.club_colors = changes.club_colors;
        self.venue = changes.venue;
        self.website = changes.website;
        self.updated_at = self.updated_at.max(now);
    }

    // ===== Getters =====

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn external_id(&self) -> i64 {
        self.external_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    pub fn tla(&self) -> Option<&str> {
        self.tla.as_deref()
    }

    pub fn crest(&self) -> Option<&str> {
        self.crest.as_deref()
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    /// Founding year, when upstream reports one
    pub fn founded(&self) -> Option<i32> {
        self.founded
    }

    pub fn club_colors(&self) -> Option<&str> {
        self.club_colors.as_deref()
    }

    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// # Note
    /// Only to be used by store implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
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
    ) -> Self {
        Self {
            id,
            external_id,
            name,
            short_name,
            tla,
            crest,
            area,
            founded,
            club_colors,
            venue,
            website,
            created_at,
            updated_at,
        }
    }
}
