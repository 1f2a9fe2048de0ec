//! Database schema and connection management

use crate::error::LeagueError;
use crate::{Result, DB_PATH_ENV_VAR};
use log::debug;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const DATABASE_FILE_NAME: &str = "golf_league.db";

/// SQLite-backed league storage.
///
/// Holds only the database location; every operation opens its own
/// connection and drops it before returning.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteStorage {
    /// Open the database at the resolved default location
    pub fn new() -> Result<Self> {
        Self::open(resolve_database_path(None)?)
    }

    /// Open (creating if needed) the database at `path` and ensure tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();

        // Ensure the containing directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let storage = Self {
            db_path,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Change how long a connection waits on a locked database
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Location of the backing database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    pub(crate) fn connect(&self) -> Result<Connection> {
        debug!(
            "event=db_connect module=storage path={}",
            self.db_path.display()
        );
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(self.busy_timeout)?;
        // Bundled SQLite defaults to enforcing; references are declared only
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(conn)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS courses (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                holes TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS teams (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                day TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS players (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                team_id TEXT NOT NULL,
                handicap INTEGER NOT NULL,
                history TEXT,
                FOREIGN KEY (team_id) REFERENCES teams(id)
            );

            CREATE TABLE IF NOT EXISTS matches (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                day TEXT NOT NULL,
                team1_id TEXT NOT NULL,
                team2_id TEXT NOT NULL,
                completed INTEGER DEFAULT 0,
                winner_id TEXT,
                score TEXT,
                scores TEXT,
                FOREIGN KEY (team1_id) REFERENCES teams(id),
                FOREIGN KEY (team2_id) REFERENCES teams(id),
                FOREIGN KEY (winner_id) REFERENCES teams(id)
            );",
        )?;

        debug!(
            "event=schema_init module=storage status=ok path={}",
            self.db_path.display()
        );
        Ok(())
    }
}

/// Pick the database file: explicit path, then `GOLF_LEAGUE_DB`, then the
/// per-user data directory.
pub fn resolve_database_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    default_database_path()
}

/// Path: ~/.local/share/golf-league/golf_league.db (platform data dir)
pub fn default_database_path() -> Result<PathBuf> {
    let base = match dirs::data_dir() {
        Some(dir) => dir.join("golf-league"),
        None => std::env::current_dir()
            .map_err(|err| LeagueError::DataDir {
                message: err.to_string(),
            })?
            .join("database"),
    };
    Ok(base.join(DATABASE_FILE_NAME))
}
