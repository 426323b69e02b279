// football-data.org adapter

pub mod client;

pub use client::{FootballDataClient, AUTH_HEADER};
