//! Data models for the storage layer
//!
//! These are the wire representations: camelCase field names, structured
//! sub-records as plain JSON values, and optional match results that are
//! omitted entirely when unset.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A golf course and its ordered hole definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub holes: Vec<Value>,
}

/// A league team, grouped by the day it plays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub day: String,
}

/// A player on a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub team_id: String,
    pub handicap: i64,
    #[serde(default)]
    pub history: Vec<Value>,
}

/// A scheduled or completed match between two teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub date: String,
    pub day: String,
    pub team1_id: String,
    pub team2_id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default)]
    pub scores: Vec<Value>,
}

/// Everything a bulk seed can carry; any sequence may be omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedBundle {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl SeedBundle {
    /// Total number of records across all four sequences
    pub fn len(&self) -> usize {
        self.courses.len() + self.teams.len() + self.players.len() + self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
