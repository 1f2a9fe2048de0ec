//! Contract operations for the SQLite engine

use super::contract::LeagueStorage;
use super::models::{Course, Match, Player, SeedBundle, Team};
use super::rows::{
    bool_to_int, encode_list, non_empty, row_to_team, CourseRow, MatchRow, PlayerRow,
    COURSE_COLUMNS, MATCH_COLUMNS, PLAYER_COLUMNS, TEAM_COLUMNS,
};
use super::schema::SqliteStorage;
use crate::Result;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};

/// Whether a write may replace an existing row with the same id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Insert,
    Upsert,
}

impl WriteMode {
    fn verb(self) -> &'static str {
        match self {
            WriteMode::Insert => "INSERT",
            WriteMode::Upsert => "INSERT OR REPLACE",
        }
    }
}

fn write_course(conn: &Connection, mode: WriteMode, course: &Course) -> Result<()> {
    conn.execute(
        &format!("{} INTO courses (id, name, holes) VALUES (?1, ?2, ?3)", mode.verb()),
        params![course.id, course.name, encode_list(&course.holes)?],
    )?;
    Ok(())
}

fn write_team(conn: &Connection, mode: WriteMode, team: &Team) -> Result<()> {
    conn.execute(
        &format!("{} INTO teams (id, name, day) VALUES (?1, ?2, ?3)", mode.verb()),
        params![team.id, team.name, team.day],
    )?;
    Ok(())
}

fn write_player(conn: &Connection, mode: WriteMode, player: &Player) -> Result<()> {
    conn.execute(
        &format!(
            "{} INTO players (id, name, team_id, handicap, history)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            mode.verb()
        ),
        params![
            player.id,
            player.name,
            player.team_id,
            player.handicap,
            encode_list(&player.history)?
        ],
    )?;
    Ok(())
}

fn write_match(conn: &Connection, mode: WriteMode, game: &Match) -> Result<()> {
    conn.execute(
        &format!(
            "{} INTO matches
             (id, date, day, team1_id, team2_id, completed, winner_id, score, scores)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            mode.verb()
        ),
        params![
            game.id,
            game.date,
            game.day,
            game.team1_id,
            game.team2_id,
            bool_to_int(game.completed),
            game.winner_id,
            game.score,
            encode_list(&game.scores)?
        ],
    )?;
    Ok(())
}

/// The record as a later read would return it
fn echo_match(id: String, game: &Match) -> Match {
    Match {
        id,
        winner_id: non_empty(game.winner_id.clone()),
        score: non_empty(game.score.clone()),
        ..game.clone()
    }
}

impl SqliteStorage {
    fn delete_by_id(&self, table: &str, id: &str) -> Result<bool> {
        let conn = self.connect()?;
        let removed = conn.execute(&format!("DELETE FROM {table} WHERE id = ?1"), [id])?;
        Ok(removed > 0)
    }

    fn load_bundle(&self, bundle: &SeedBundle) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        for course in &bundle.courses {
            write_course(&tx, WriteMode::Upsert, course)?;
        }
        for team in &bundle.teams {
            write_team(&tx, WriteMode::Upsert, team)?;
        }
        for player in &bundle.players {
            write_player(&tx, WriteMode::Upsert, player)?;
        }
        for game in &bundle.matches {
            write_match(&tx, WriteMode::Upsert, game)?;
        }

        // Dropping an uncommitted transaction rolls it back
        tx.commit()?;
        Ok(())
    }
}

impl LeagueStorage for SqliteStorage {
    fn list_courses(&self) -> Result<Vec<Course>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT {COURSE_COLUMNS} FROM courses"))?;
        let rows = stmt.query_map([], CourseRow::from_row)?;

        let mut courses = Vec::new();
        for row in rows {
            courses.push(row?.into_course()?);
        }
        Ok(courses)
    }

    fn get_course(&self, id: &str) -> Result<Option<Course>> {
        let conn = self.connect()?;
        let row = conn
            .query_row(
                &format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1"),
                [id],
                CourseRow::from_row,
            )
            .optional()?;
        row.map(CourseRow::into_course).transpose()
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT {TEAM_COLUMNS} FROM teams"))?;
        let teams = stmt
            .query_map([], row_to_team)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(teams)
    }

    fn get_team(&self, id: &str) -> Result<Option<Team>> {
        let conn = self.connect()?;
        let team = conn
            .query_row(
                &format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?1"),
                [id],
                row_to_team,
            )
            .optional()?;
        Ok(team)
    }

    fn create_team(&self, team: &Team) -> Result<Team> {
        let conn = self.connect()?;
        write_team(&conn, WriteMode::Insert, team)?;
        Ok(team.clone())
    }

    fn update_team(&self, id: &str, team: &Team) -> Result<Team> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE teams SET name = ?1, day = ?2 WHERE id = ?3",
            params![team.name, team.day, id],
        )?;
        Ok(Team {
            id: id.to_string(),
            ..team.clone()
        })
    }

    fn delete_team(&self, id: &str) -> Result<bool> {
        self.delete_by_id("teams", id)
    }

    fn list_players(&self) -> Result<Vec<Player>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT {PLAYER_COLUMNS} FROM players"))?;
        let rows = stmt.query_map([], PlayerRow::from_row)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?.into_player()?);
        }
        Ok(players)
    }

    fn get_player(&self, id: &str) -> Result<Option<Player>> {
        let conn = self.connect()?;
        let row = conn
            .query_row(
                &format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1"),
                [id],
                PlayerRow::from_row,
            )
            .optional()?;
        row.map(PlayerRow::into_player).transpose()
    }

    fn create_player(&self, player: &Player) -> Result<Player> {
        let conn = self.connect()?;
        write_player(&conn, WriteMode::Insert, player)?;
        Ok(player.clone())
    }

    fn update_player(&self, id: &str, player: &Player) -> Result<Player> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE players SET name = ?1, team_id = ?2, handicap = ?3, history = ?4
             WHERE id = ?5",
            params![
                player.name,
                player.team_id,
                player.handicap,
                encode_list(&player.history)?,
                id
            ],
        )?;
        Ok(Player {
            id: id.to_string(),
            ..player.clone()
        })
    }

    fn delete_player(&self, id: &str) -> Result<bool> {
        self.delete_by_id("players", id)
    }

    fn list_matches(&self) -> Result<Vec<Match>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT {MATCH_COLUMNS} FROM matches"))?;
        let rows = stmt.query_map([], MatchRow::from_row)?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?.into_match()?);
        }
        Ok(matches)
    }

    fn get_match(&self, id: &str) -> Result<Option<Match>> {
        let conn = self.connect()?;
        let row = conn
            .query_row(
                &format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?1"),
                [id],
                MatchRow::from_row,
            )
            .optional()?;
        row.map(MatchRow::into_match).transpose()
    }

    fn create_match(&self, game: &Match) -> Result<Match> {
        let conn = self.connect()?;
        write_match(&conn, WriteMode::Insert, game)?;
        Ok(echo_match(game.id.clone(), game))
    }

    fn update_match(&self, id: &str, game: &Match) -> Result<Match> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE matches SET date = ?1, day = ?2, team1_id = ?3, team2_id = ?4,
                completed = ?5, winner_id = ?6, score = ?7, scores = ?8
             WHERE id = ?9",
            params![
                game.date,
                game.day,
                game.team1_id,
                game.team2_id,
                bool_to_int(game.completed),
                game.winner_id,
                game.score,
                encode_list(&game.scores)?,
                id
            ],
        )?;
        Ok(echo_match(id.to_string(), game))
    }

    fn delete_match(&self, id: &str) -> Result<bool> {
        self.delete_by_id("matches", id)
    }

    fn initialize_data(&self, bundle: &SeedBundle) -> bool {
        match self.load_bundle(bundle) {
            Ok(()) => {
                info!(
                    "event=seed module=storage status=ok courses={} teams={} players={} matches={}",
                    bundle.courses.len(),
                    bundle.teams.len(),
                    bundle.players.len(),
                    bundle.matches.len()
                );
                true
            }
            Err(err) => {
                error!(
                    "event=seed module=storage status=error records={} error={}",
                    bundle.len(),
                    err
                );
                false
            }
        }
    }

    fn is_initialized(&self) -> Result<bool> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count > 0)
    }
}
