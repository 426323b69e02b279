//! Brasileirão API Library
//!
//! Caches football-data.org team data in PostgreSQL, serves it over HTTP
//! and computes founding-year indicators over the cache. Also manages user
//! accounts with bearer-token authentication.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
