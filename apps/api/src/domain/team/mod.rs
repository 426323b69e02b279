// Team domain module
// Cached team entity plus the upstream payload it is reconciled from

#![allow(clippy::module_inception)]

pub mod payload;
pub mod team;

// Re-export main types for convenience
pub use payload::{AreaField, TeamPayload};
pub use team::{Team, TeamChanges, TeamError};
