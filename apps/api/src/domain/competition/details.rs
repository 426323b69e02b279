use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /v4/teams/{id}`, re-exposed with snake_case keys
///
/// `area`, `coach` and `squad` are carried as raw JSON; their inner shape
/// belongs to the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDetails {
    pub id: i64,
    pub name: String,
    #[serde(default, alias = "shortName")]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub area: Option<Value>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default, alias = "clubColors")]
    pub club_colors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub coach: Option<Value>,
    #[serde(default)]
    pub squad: Option<Vec<Value>>,
}
