use std::collections::BTreeMap;

use serde::Serialize;

use super::errors::{ServiceError, ServiceResult};
use crate::domain::repositories::TeamStore;
use crate::domain::team::Team;

/// Teams founded up to this year count as centenary
pub const CENTENARY_CUTOFF: i32 = 1924;

/// Teams founded from this year on count as modern
pub const MODERN_CUTOFF: i32 = 1990;

/// Length of the oldest/newest rankings
pub const RANKING_SIZE: usize = 5;

/// Aggregate statistics over the cached teams
///
/// Computed on every request; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSnapshot {
    pub total_teams: usize,
    #[serde(rename = "times_com_fundacao")]
    pub teams_with_founded: usize,
    #[serde(rename = "estatisticas_historicas")]
    pub history: HistoricalStats,
    #[serde(rename = "distribuicao_temporal")]
    pub distribution: TemporalDistribution,
    pub rankings: Rankings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalStats {
    #[serde(rename = "time_mais_antigo")]
    pub oldest: Option<Milestone>,
    #[serde(rename = "time_mais_recente")]
    pub newest: Option<Milestone>,
    #[serde(rename = "media_ano_fundacao")]
    pub average_founded: Option<f64>,
    #[serde(rename = "periodo_fundacao")]
    pub founding_period: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    #[serde(rename = "nome")]
    pub name: String,
    pub tla: Option<String>,
    #[serde(rename = "ano_fundacao")]
    pub founded: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalDistribution {
    #[serde(rename = "por_decada")]
    pub by_decade: Vec<DecadeBucket>,
    #[serde(rename = "times_centenarios")]
    pub centenary: usize,
    #[serde(rename = "times_modernos")]
    pub modern: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeBucket {
    /// e.g. `1900s`
    #[serde(rename = "decada")]
    pub label: String,
    #[serde(rename = "quantidade")]
    pub count: usize,
    #[serde(rename = "percentual")]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rankings {
    #[serde(rename = "times_mais_antigos")]
    pub oldest: Vec<RankedTeam>,
    #[serde(rename = "times_mais_novos")]
    pub newest: Vec<RankedTeam>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTeam {
    #[serde(rename = "nome")]
    pub name: String,
    pub tla: Option<String>,
    #[serde(rename = "fundacao")]
    pub founded: i32,
}

/// Read-only statistics over a [`TeamStore`]
pub struct IndicatorEngine<S> {
    store: S,
}

impl<S: TeamStore> IndicatorEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Snapshot of the current cache, or `NoDataYet` when it is empty
    pub async fn compute_indicators(&self) -> ServiceResult<IndicatorSnapshot> {
        let teams = self
            .store
            .list_all()
            .await
            .map_err(|e| ServiceError::from(e).context("Error computing indicators"))?;

        compute_snapshot(&teams)
    }
}

/// Pure aggregation behind [`IndicatorEngine::compute_indicators`]
///
/// `teams` is expected in local id order; ties in rankings keep that order.
pub fn compute_snapshot(teams: &[Team]) -> ServiceResult<IndicatorSnapshot> {
    if teams.is_empty() {
        return Err(ServiceError::NoDataYet);
    }

    let founded: Vec<(&Team, i32)> = teams
        .iter()
        .filter_map(|team| team.founded().map(|year| (team, year)))
        .collect();

    let centenary = founded.iter().filter(|(_, y)| *y <= CENTENARY_CUTOFF).count();
    let modern = founded.iter().filter(|(_, y)| *y >= MODERN_CUTOFF).count();

    if founded.is_empty() {
        return Ok(IndicatorSnapshot {
            total_teams: teams.len(),
            teams_with_founded: 0,
            history: HistoricalStats {
                oldest: None,
                newest: None,
                average_founded: None,
                founding_period: None,
            },
            distribution: TemporalDistribution {
                by_decade: Vec::new(),
                centenary,
                modern,
            },
            rankings: Rankings {
                oldest: Vec::new(),
                newest: Vec::new(),
            },
        });
    }

    // Lowest local id wins among teams sharing the extreme year.
    let oldest = founded
        .iter()
        .min_by_key(|(team, year)| (*year, team.id()))
        .map(|(team, year)| milestone(team, *year));
    let newest = founded
        .iter()
        .min_by_key(|(team, year)| (std::cmp::Reverse(*year), team.id()))
        .map(|(team, year)| milestone(team, *year));

    let sum: i64 = founded.iter().map(|(_, y)| i64::from(*y)).sum();
    let average = round_one_decimal(sum as f64 / founded.len() as f64);

    let founding_period = match (&oldest, &newest) {
        (Some(o), Some(n)) => Some(format!("{}-{}", o.founded, n.founded)),
        _ => None,
    };

    Ok(IndicatorSnapshot {
        total_teams: teams.len(),
        teams_with_founded: founded.len(),
        history: HistoricalStats {
            oldest,
            newest,
            average_founded: Some(average),
            founding_period,
        },
        distribution: TemporalDistribution {
            by_decade: decade_buckets(&founded),
            centenary,
            modern,
        },
        rankings: rankings(&founded),
    })
}

fn milestone(team: &Team, founded: i32) -> Milestone {
    Milestone {
        name: team.name().to_string(),
        tla: team.tla().map(str::to_string),
        founded,
    }
}

fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

fn decade_buckets(founded: &[(&Team, i32)]) -> Vec<DecadeBucket> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for (_, year) in founded {
        *counts.entry(decade_of(*year)).or_default() += 1;
    }

    let total = founded.len() as f64;
    counts
        .into_iter()
        .map(|(decade, count)| DecadeBucket {
            label: format!("{}s", decade),
            count,
            percentage: round_one_decimal(count as f64 / total * 100.0),
        })
        .collect()
}

fn rankings(founded: &[(&Team, i32)]) -> Rankings {
    let ranked = |(team, year): &(&Team, i32)| RankedTeam {
        name: team.name().to_string(),
        tla: team.tla().map(str::to_string),
        founded: *year,
    };

    // Both sorts are stable, ties keep input order.
    let mut ascending = founded.to_vec();
    ascending.sort_by_key(|(_, year)| *year);

    let mut descending = founded.to_vec();
    descending.sort_by_key(|(_, year)| std::cmp::Reverse(*year));

    Rankings {
        oldest: ascending.iter().take(RANKING_SIZE).map(ranked).collect(),
        newest: descending.iter().take(RANKING_SIZE).map(ranked).collect(),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
