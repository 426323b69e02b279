// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod competition;
pub mod repositories;
pub mod team;
pub mod user;
