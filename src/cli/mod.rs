//! CLI argument definitions and parsing.

use crate::api::Method;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;


/// The league's record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Course,
    Team,
    Player,
    Match,
}

impl Entity {
    pub fn label(self) -> &'static str {
        match self {
            Entity::Course => "Course",
            Entity::Team => "Team",
            Entity::Player => "Player",
            Entity::Match => "Match",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Parser)]
#[clap(name = "golf-league", about = "Golf league storage CLI")]
pub struct GolfLeague {
    /// Database file (or set `GOLF_LEAGUE_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report whether the league has been seeded
    Status,

    /// Load a JSON bundle of courses, teams, players and matches
    Seed {
        /// Path to the bundle file.
        file: PathBuf,

        /// Only seed when no players exist yet.
        #[clap(long)]
        if_empty: bool,
    },

    /// Print every record of one kind as JSON
    List {
        #[clap(value_enum)]
        entity: Entity,
    },

    /// Print one record by id
    Get {
        #[clap(value_enum)]
        entity: Entity,

        id: String,
    },

    /// Delete one team, player or match
    Delete {
        #[clap(value_enum)]
        entity: Entity,

        id: String,
    },

    /// Run a single request through the API handler
    Request {
        /// GET, POST, PUT or DELETE.
        method: Method,

        /// Route such as `/api/teams/t1`.
        path: String,

        /// JSON request body.
        #[clap(long)]
        body: Option<String>,
    },
}
