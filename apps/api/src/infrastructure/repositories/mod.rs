// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_team_store;
pub mod postgres_user_repository;

pub use postgres_team_store::PostgresTeamStore;
pub use postgres_user_repository::PostgresUserRepository;
