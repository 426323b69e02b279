use serde::{Deserialize, Serialize};

/// A single team record as delivered by the competition-data API
///
/// Upstream uses camelCase (`shortName`, `clubColors`); snake_case is
/// accepted too so cached fixtures and upstream bodies decode alike.
/// Only `id` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPayload {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "shortName")]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub area: Option<AreaField>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default, alias = "clubColors")]
    pub club_colors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl TeamPayload {
    /// Creates a payload carrying only the external identifier and a name
    pub fn named(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Area name flattened to a plain string
    pub fn area_name(&self) -> Option<String> {
        self.area.as_ref().and_then(AreaField::resolve)
    }
}

/// Area as sent upstream: either an object carrying `name` or a bare string
///
/// # Example
/// ```
/// use brasileirao_api::domain::team::AreaField;
///
/// let nested: AreaField = serde_json::from_str(r#"{"id": 2032, "name": "Brazil"}"#).unwrap();
/// let plain: AreaField = serde_json::from_str(r#""Brazil""#).unwrap();
///
/// assert_eq!(nested.resolve().as_deref(), Some("Brazil"));
/// assert_eq!(plain.resolve().as_deref(), Some("Brazil"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaField {
    Named {
        #[serde(default)]
        name: Option<String>,
    },
    Plain(String),
}

impl AreaField {
    pub fn resolve(&self) -> Option<String> {
        match self {
            AreaField::Named { name } => name.clone(),
            AreaField::Plain(name) => Some(name.clone()),
        }
    }
}
