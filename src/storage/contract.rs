//! Backend-independent storage contract
//!
//! Every persistence operation the league application needs. Lookups
//! report a miss as `Ok(None)`; only transport faults are errors.

use super::models::{Course, Match, Player, SeedBundle, Team};
use crate::Result;

pub trait LeagueStorage {
    fn list_courses(&self) -> Result<Vec<Course>>;
    fn get_course(&self, id: &str) -> Result<Option<Course>>;

    fn list_teams(&self) -> Result<Vec<Team>>;
    fn get_team(&self, id: &str) -> Result<Option<Team>>;
    fn create_team(&self, team: &Team) -> Result<Team>;
    /// Overwrites the team stored under `id`. An unknown id writes nothing
    /// and still returns the record with `id` applied.
    fn update_team(&self, id: &str, team: &Team) -> Result<Team>;
    /// Returns true iff a row was removed
    fn delete_team(&self, id: &str) -> Result<bool>;

    fn list_players(&self) -> Result<Vec<Player>>;
    fn get_player(&self, id: &str) -> Result<Option<Player>>;
    fn create_player(&self, player: &Player) -> Result<Player>;
    fn update_player(&self, id: &str, player: &Player) -> Result<Player>;
    fn delete_player(&self, id: &str) -> Result<bool>;

    fn list_matches(&self) -> Result<Vec<Match>>;
    fn get_match(&self, id: &str) -> Result<Option<Match>>;
    fn create_match(&self, game: &Match) -> Result<Match>;
    fn update_match(&self, id: &str, game: &Match) -> Result<Match>;
    fn delete_match(&self, id: &str) -> Result<bool>;

    /// Upserts the whole bundle atomically. Never errors: any fault rolls
    /// the bundle back and is reported as `false`.
    fn initialize_data(&self, bundle: &SeedBundle) -> bool;

    /// True iff at least one player exists
    fn is_initialized(&self) -> Result<bool>;
}

impl<S: LeagueStorage + ?Sized> LeagueStorage for &S {
    fn list_courses(&self) -> Result<Vec<Course>> {
        (**self).list_courses()
    }

    fn get_course(&self, id: &str) -> Result<Option<Course>> {
        (**self).get_course(id)
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        (**self).list_teams()
    }

    fn get_team(&self, id: &str) -> Result<Option<Team>> {
        (**self).get_team(id)
    }

    fn create_team(&self, team: &Team) -> Result<Team> {
        (**self).create_team(team)
    }

    fn update_team(&self, id: &str, team: &Team) -> Result<Team> {
        (**self).update_team(id, team)
    }

    fn delete_team(&self, id: &str) -> Result<bool> {
        (**self).delete_team(id)
    }

    fn list_players(&self) -> Result<Vec<Player>> {
        (**self).list_players()
    }

    fn get_player(&self, id: &str) -> Result<Option<Player>> {
        (**self).get_player(id)
    }

    fn create_player(&self, player: &Player) -> Result<Player> {
        (**self).create_player(player)
    }

    fn update_player(&self, id: &str, player: &Player) -> Result<Player> {
        (**self).update_player(id, player)
    }

    fn delete_player(&self, id: &str) -> Result<bool> {
        (**self).delete_player(id)
    }

    fn list_matches(&self) -> Result<Vec<Match>> {
        (**self).list_matches()
    }

    fn get_match(&self, id: &str) -> Result<Option<Match>> {
        (**self).get_match(id)
    }

    fn create_match(&self, game: &Match) -> Result<Match> {
        (**self).create_match(game)
    }

    fn update_match(&self, id: &str, game: &Match) -> Result<Match> {
        (**self).update_match(id, game)
    }

    fn delete_match(&self, id: &str) -> Result<bool> {
        (**self).delete_match(id)
    }

    fn initialize_data(&self, bundle: &SeedBundle) -> bool {
        (**self).initialize_data(bundle)
    }

    fn is_initialized(&self) -> Result<bool> {
        (**self).is_initialized()
    }
}
