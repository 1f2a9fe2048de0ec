//! Translation between stored rows and wire records
//!
//! The relational layout uses snake_case reference columns, JSON text for
//! structured sub-records, a 0/1 integer for the completion flag, and
//! nullable winner/score columns. Records read from here never carry an
//! empty winner or score.

use super::models::{Course, Match, Player, Team};
use crate::Result;
use rusqlite::Row;
use serde_json::Value;

pub(crate) const COURSE_COLUMNS: &str = "id, name, holes";
pub(crate) const TEAM_COLUMNS: &str = "id, name, day";
pub(crate) const PLAYER_COLUMNS: &str = "id, name, team_id, handicap, history";
pub(crate) const MATCH_COLUMNS: &str =
    "id, date, day, team1_id, team2_id, completed, winner_id, score, scores";

/// Encode a structured sub-record sequence as stored JSON text
pub fn encode_list(values: &[Value]) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}

/// Decode stored JSON text; NULL, empty text or a JSON `null` is the
/// empty sequence
pub fn decode_list(raw: Option<&str>) -> Result<Vec<Value>> {
    let text = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Ok(Vec::new()),
    };

    match serde_json::from_str::<Value>(text)? {
        Value::Null => Ok(Vec::new()),
        other => Ok(serde_json::from_value(other)?),
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Raw `courses` row
pub(crate) struct CourseRow {
    id: String,
    name: String,
    holes: Option<String>,
}

impl CourseRow {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            holes: row.get("holes")?,
        })
    }

    pub(crate) fn into_course(self) -> Result<Course> {
        Ok(Course {
            holes: decode_list(self.holes.as_deref())?,
            id: self.id,
            name: self.name,
        })
    }
}

pub(crate) fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get("id")?,
        name: row.get("name")?,
        day: row.get("day")?,
    })
}

/// Raw `players` row
pub(crate) struct PlayerRow {
    id: String,
    name: String,
    team_id: String,
    handicap: i64,
    history: Option<String>,
}

impl PlayerRow {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            team_id: row.get("team_id")?,
            handicap: row.get("handicap")?,
            history: row.get("history")?,
        })
    }

    pub(crate) fn into_player(self) -> Result<Player> {
        Ok(Player {
            history: decode_list(self.history.as_deref())?,
            id: self.id,
            name: self.name,
            team_id: self.team_id,
            handicap: self.handicap,
        })
    }
}

/// Raw `matches` row
pub(crate) struct MatchRow {
    id: String,
    date: String,
    day: String,
    team1_id: String,
    team2_id: String,
    completed: Option<i64>,
    winner_id: Option<String>,
    score: Option<String>,
    scores: Option<String>,
}

impl MatchRow {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            day: row.get("day")?,
            team1_id: row.get("team1_id")?,
            team2_id: row.get("team2_id")?,
            completed: row.get("completed")?,
            winner_id: row.get("winner_id")?,
            score: row.get("score")?,
            scores: row.get("scores")?,
        })
    }

    pub(crate) fn into_match(self) -> Result<Match> {
        Ok(Match {
            scores: decode_list(self.scores.as_deref())?,
            id: self.id,
            date: self.date,
            day: self.day,
            team1_id: self.team1_id,
            team2_id: self.team2_id,
            completed: self.completed.unwrap_or(0) != 0,
            winner_id: non_empty(self.winner_id),
            score: non_empty(self.score),
        })
    }
}
