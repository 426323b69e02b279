// Wire types of the competition-data API
// Listing, team details and fixtures as exchanged with football-data.org

pub mod details;
pub mod listing;
pub mod matches;

pub use details::TeamDetails;
pub use listing::{Competition, TeamListPayload, TeamSummary, TeamsListResponse};
pub use matches::{Match, MatchListPayload, MatchSide, Score};
