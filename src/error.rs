//! Error types for the golf league storage layer

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine data directory: {message}")]
    DataDir { message: String },

    #[error("Seed failed: {message}")]
    SeedFailed { message: String },

    #[error("Invalid request: {message}")]
    Request { message: String },
}
