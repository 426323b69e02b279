use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::listing::Competition;

/// Body of `GET /v4/teams/{id}/matches`, passed through in upstream casing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchListPayload {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub filters: Map<String, Value>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub utc_date: String,
    pub status: String,
    #[serde(default)]
    pub matchday: Option<i32>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    pub competition: Competition,
    pub home_team: MatchSide,
    pub away_team: MatchSide,
    pub score: Score,
}

/// Home or away side; ids are null for fixtures with undecided opponents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSide {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub full_time: Option<Value>,
    #[serde(default)]
    pub half_time: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_keep_upstream_casing() {
        let payload: MatchListPayload = serde_json::from_value(json!({
            "filters": {"competitions": "BSA"},
            "resultSet": {"count": 1},
            "count": 1,
            "matches": [{
                "id": 500001,
                "utcDate": "2025-04-13T21:30:00Z",
                "status": "FINISHED",
                "matchday": 3,
                "stage": "REGULAR_SEASON",
                "group": null,
                "lastUpdated": "2025-04-14T00:20:00Z",
                "competition": {"id": 2013, "name": "Campeonato Brasileiro Série A", "code": "BSA", "type": "LEAGUE"},
                "homeTeam": {"id": 1783, "name": "CR Flamengo", "shortName": "Flamengo", "tla": "FLA"},
                "awayTeam": {"id": null, "name": null},
                "score": {"winner": "HOME_TEAM", "duration": "REGULAR", "fullTime": {"home": 2, "away": 0}}
            }]
        }))
        .unwrap();

        let game = &payload.matches[0];
        assert_eq!(game.home_team.short_name.as_deref(), Some("Flamengo"));
        assert_eq!(game.away_team.id, None);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["matches"][0]["utcDate"], "2025-04-13T21:30:00Z");
        assert_eq!(body["matches"][0]["score"]["fullTime"]["home"], 2);
        assert_eq!(body["matches"][0]["competition"]["type"], "LEAGUE");
    }
}
