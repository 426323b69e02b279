use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::team::{Team, TeamPayload};

/// Season reported by listings rebuilt from the local cache
pub const CACHED_SEASON: &str = "2025";

/// Competition descriptor shared by listings and matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub emblem: Option<String>,
}

impl Competition {
    /// Campeonato Brasileiro Série A, as football-data.org describes it
    pub fn brasileirao() -> Self {
        Self {
            id: 2013,
            name: "Campeonato Brasileiro Série A".to_string(),
            code: Some("BSA".to_string()),
            kind: Some("LEAGUE".to_string()),
            emblem: Some("https://crests.football-data.org/bsa.png".to_string()),
        }
    }
}

/// Body of `GET /v4/competitions/{code}/teams`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamListPayload {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub filters: Map<String, Value>,
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub teams: Vec<TeamPayload>,
}

/// Team entry exposed by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    /// External identifier, never the local surrogate key
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest: Option<String>,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            id: team.external_id(),
            name: team.name().to_string(),
            short_name: team.short_name().map(str::to_string),
            tla: team.tla().map(str::to_string),
            crest: team.crest().map(str::to_string),
        }
    }
}

impl From<TeamPayload> for TeamSummary {
    fn from(payload: TeamPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.unwrap_or_default(),
            short_name: payload.short_name,
            tla: payload.tla,
            crest: payload.crest,
        }
    }
}

/// Public listing contract, whether served from cache or upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamsListResponse {
    pub count: usize,
    pub filters: Map<String, Value>,
    pub competition: Competition,
    pub teams: Vec<TeamSummary>,
}

impl TeamsListResponse {
    /// Synthetic listing rebuilt from cached rows
    pub fn from_cache(teams: &[Team]) -> Self {
        let mut filters = Map::new();
        filters.insert("season".to_string(), Value::from(CACHED_SEASON));

        let teams: Vec<TeamSummary> = teams.iter().map(TeamSummary::from).collect();

        Self {
            count: teams.len(),
            filters,
            competition: Competition::brasileirao(),
            teams,
        }
    }
}

impl From<TeamListPayload> for TeamsListResponse {
    fn from(payload: TeamListPayload) -> Self {
        Self {
            count: payload.count,
            filters: payload.filters,
            competition: payload.competition.unwrap_or_else(Competition::brasileirao),
            teams: payload.teams.into_iter().map(TeamSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamChanges;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn competition_type_field_round_trips_as_type() {
        let competition: Competition = serde_json::from_value(json!({
            "id": 2013,
            "name": "Campeonato Brasileiro Série A",
            "code": "BSA",
            "type": "LEAGUE",
            "emblem": "https://crests.football-data.org/bsa.png"
        }))
        .unwrap();

        assert_eq!(competition, Competition::brasileirao());
        assert_eq!(serde_json::to_value(&competition).unwrap()["type"], "LEAGUE");
    }

    #[test]
    fn cache_listing_uses_external_ids_and_fixed_metadata() {
        let payload = TeamPayload {
            short_name: Some("Palmeiras".to_string()),
            tla: Some("PAL".to_string()),
            ..TeamPayload::named(1769, "SE Palmeiras")
        };
        let team = Team::create(
            3,
            payload.id,
            TeamChanges::for_new(&payload).unwrap(),
            Utc::now(),
        );

        let listing = TeamsListResponse::from_cache(&[team]);

        assert_eq!(listing.count, 1);
        assert_eq!(listing.filters["season"], "2025");
        assert_eq!(listing.competition.code.as_deref(), Some("BSA"));
        assert_eq!(listing.teams[0].id, 1769);
        assert_eq!(listing.teams[0].short_name.as_deref(), Some("Palmeiras"));
    }

    #[test]
    fn upstream_listing_is_passed_through() {
        let payload: TeamListPayload = serde_json::from_value(json!({
            "count": 1,
            "filters": {"season": "2024"},
            "competition": {"id": 2013, "name": "Campeonato Brasileiro Série A"},
            "season": {"id": 2247},
            "teams": [{"id": 1765, "name": "Fluminense FC", "shortName": "Fluminense"}]
        }))
        .unwrap();

        let listing = TeamsListResponse::from(payload);

        assert_eq!(listing.count, 1);
        assert_eq!(listing.filters["season"], "2024");
        assert_eq!(listing.competition.code, None);
        assert_eq!(listing.teams[0].short_name.as_deref(), Some("Fluminense"));
    }

    #[test]
    fn listing_serializes_snake_case_keys() {
        let listing = TeamsListResponse::from_cache(&[]);
        let body = serde_json::to_value(&listing).unwrap();

        assert_eq!(body["count"], 0);
        assert!(body["teams"].as_array().unwrap().is_empty());
        assert_eq!(body["competition"]["name"], "Campeonato Brasileiro Série A");
    }
}
