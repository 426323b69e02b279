//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use brasileirao_api::domain::repositories::{StoreError, TeamStore};
use brasileirao_api::domain::team::{Team, TeamChanges, TeamPayload};
use chrono::Utc;
use serde_json::{json, Value};

#[derive(Default)]
struct Inner {
    teams: Vec<Team>,
    next_id: i64,
    upserts: usize,
}

/// TeamStore kept in memory, with call counters for assertions
#[derive(Clone, Default)]
pub struct InMemoryTeamStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryTeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_calls(&self) -> usize {
        self.inner.lock().unwrap().upserts
    }

    pub fn snapshot(&self) -> Vec<Team> {
        self.inner.lock().unwrap().teams.clone()
    }
}

#[async_trait]
impl TeamStore for InMemoryTeamStore {
    async fn find_by_external_id(&self, external_id: i64) -> Result<Option<Team>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .teams
            .iter()
            .find(|t| t.external_id() == external_id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.inner.lock().unwrap().teams.clone())
    }

    async fn upsert(&self, payload: &TeamPayload) -> Result<Team, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.upserts += 1;
        let now = Utc::now();

        if let Some(team) = inner
            .teams
            .iter_mut()
            .find(|t| t.external_id() == payload.id)
        {
            let changes = TeamChanges::for_existing(payload, team);
            team.apply(changes, now);
            return Ok(team.clone());
        }

        let changes = TeamChanges::for_new(payload)?;
        inner.next_id += 1;
        let team = Team::create(inner.next_id, payload.id, changes, now);
        inner.teams.push(team.clone());
        Ok(team)
    }
}

/// Base URL of a local port nothing listens on
pub fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Upstream listing body for the given `(id, name, founded)` triples
pub fn competition_body(teams: &[(i64, &str, Option<i32>)]) -> Value {
    let teams: Vec<Value> = teams
        .iter()
        .map(|(id, name, founded)| {
            json!({
                "id": id,
                "name": name,
                "shortName": name.split_whitespace().next().unwrap_or(name),
                "tla": name.chars().take(3).collect::<String>().to_uppercase(),
                "crest": format!("https://crests.football-data.org/{}.png", id),
                "area": {"id": 2032, "name": "Brazil", "code": "BRA"},
                "founded": founded,
                "clubColors": "Red / White",
                "venue": "Estádio",
                "website": null
            })
        })
        .collect();

    json!({
        "count": teams.len(),
        "filters": {"season": "2025"},
        "competition": {
            "id": 2013,
            "name": "Campeonato Brasileiro Série A",
            "code": "BSA",
            "type": "LEAGUE",
            "emblem": "https://crests.football-data.org/bsa.png"
        },
        "season": {"id": 2375, "startDate": "2025-03-29", "endDate": "2025-12-21"},
        "teams": teams
    })
}

pub fn three_clubs() -> Value {
    competition_body(&[
        (1765, "Fluminense FC", Some(1902)),
        (1783, "CR Flamengo", Some(1895)),
        (4286, "RB Bragantino", Some(1928)),
    ])
}
