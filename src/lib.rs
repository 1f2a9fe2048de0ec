//! Golf League Storage Library
//!
//! Persistence and access layer for a small golf league: courses, teams,
//! players and matches, stored in a single SQLite file.
//!
//! ## Features
//!
//! - **Storage Contract**: the backend-independent `LeagueStorage` trait
//! - **SQLite Engine**: `SqliteStorage`, one connection per operation
//! - **Bulk Seeding**: atomic, idempotent upsert of a whole league bundle
//! - **Request Handling**: `LeagueApi` maps contract results to status codes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use golf_league::{LeagueStorage, SqliteStorage, Team};
//!
//! # fn example() -> golf_league::Result<()> {
//! let storage = SqliteStorage::open("league.db")?;
//! storage.create_team(&Team {
//!     id: "t1".to_string(),
//!     name: "Eagles".to_string(),
//!     day: "Mon".to_string(),
//! })?;
//! assert!(storage.get_team("t1")?.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the default database somewhere else:
//! ```bash
//! export GOLF_LEAGUE_DB=/var/lib/golf/league.db
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use api::{ApiRequest, ApiResponse, LeagueApi, Method};
pub use error::{LeagueError, Result};
pub use storage::{Course, LeagueStorage, Match, Player, SeedBundle, SqliteStorage, Team};

pub const DB_PATH_ENV_VAR: &str = "GOLF_LEAGUE_DB";
