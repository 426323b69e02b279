// Application services
// Orchestrate domain ports; constructed per request around cheap handles

pub mod errors;
pub mod indicators;
pub mod team_sync;

pub use errors::{ServiceError, ServiceResult};
pub use indicators::{compute_snapshot, IndicatorEngine, IndicatorSnapshot};
pub use team_sync::{CachePolicy, ImportResult, TeamSyncService};
