//! Storage layer for the golf league
//!
//! This module provides the storage contract and its SQLite engine,
//! organized into logical components:
//! - `models`: Wire records (courses, teams, players, matches, seed bundles)
//! - `contract`: The backend-independent `LeagueStorage` trait
//! - `schema`: Database location, connection and schema management
//! - `rows`: Row <-> record translation and sub-record encoding
//! - `queries`: `LeagueStorage` implemented over SQLite

pub mod contract;
pub mod models;
pub mod queries;
pub mod rows;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and storage engine for easy access
pub use contract::LeagueStorage;
pub use models::*;
pub use rows::{decode_list, encode_list};
pub use schema::{default_database_path, resolve_database_path, SqliteStorage};
