// Infrastructure layer module
// Contains database adapters and external service integrations
// Follows Hexagonal Architecture

pub mod football_data;
pub mod repositories;
