//! Command handlers for the CLI.
//!
//! Each handler takes the storage it operates on and returns the JSON
//! value to print, leaving output formatting to the entry point.

use crate::{
    api::{ApiRequest, ApiResponse, LeagueApi, Method},
    cli::Entity,
    error::LeagueError,
    storage::{LeagueStorage, SeedBundle},
    Result,
};
use serde_json::{json, Value};
use std::path::Path;


/// Outcome of a `seed` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Loaded { records: usize },
    AlreadyInitialized,
}

/// `{"initialized": bool}`
pub fn handle_status<S: LeagueStorage>(storage: &S) -> Result<Value> {
    Ok(json!({ "initialized": storage.is_initialized()? }))
}

/// Read a bundle file and load it in one transaction
pub fn handle_seed<S: LeagueStorage>(
    storage: &S,
    file: &Path,
    if_empty: bool,
) -> Result<SeedOutcome> {
    if if_empty && storage.is_initialized()? {
        return Ok(SeedOutcome::AlreadyInitialized);
    }

    let bundle = load_bundle(file)?;
    if !storage.initialize_data(&bundle) {
        return Err(LeagueError::SeedFailed {
            message: format!("could not initialize database from {}", file.display()),
        });
    }

    Ok(SeedOutcome::Loaded {
        records: bundle.len(),
    })
}

/// Parse a seed bundle from a JSON file
pub fn load_bundle(file: &Path) -> Result<SeedBundle> {
    let contents = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn handle_list<S: LeagueStorage>(storage: &S, entity: Entity) -> Result<Value> {
    let records = match entity {
        Entity::Course => serde_json::to_value(storage.list_courses()?)?,
        Entity::Team => serde_json::to_value(storage.list_teams()?)?,
        Entity::Player => serde_json::to_value(storage.list_players()?)?,
        Entity::Match => serde_json::to_value(storage.list_matches()?)?,
    };
    Ok(records)
}

/// One record, or `None` when the id is unknown
pub fn handle_get<S: LeagueStorage>(
    storage: &S,
    entity: Entity,
    id: &str,
) -> Result<Option<Value>> {
    let record = match entity {
        Entity::Course => storage.get_course(id)?.map(serde_json::to_value),
        Entity::Team => storage.get_team(id)?.map(serde_json::to_value),
        Entity::Player => storage.get_player(id)?.map(serde_json::to_value),
        Entity::Match => storage.get_match(id)?.map(serde_json::to_value),
    };
    Ok(record.transpose()?)
}

/// Returns whether a row was removed
pub fn handle_delete<S: LeagueStorage>(storage: &S, entity: Entity, id: &str) -> Result<bool> {
    match entity {
        Entity::Course => Err(LeagueError::Request {
            message: "courses cannot be deleted".to_string(),
        }),
        Entity::Team => storage.delete_team(id),
        Entity::Player => storage.delete_player(id),
        Entity::Match => storage.delete_match(id),
    }
}

/// Send one request through the API handler
pub fn handle_request<S: LeagueStorage>(
    storage: &S,
    method: Method,
    path: &str,
    body: Option<&str>,
) -> Result<ApiResponse> {
    let mut request = ApiRequest::new(method, path);
    if let Some(raw) = body {
        request = request.with_body(serde_json::from_str(raw)?);
    }

    Ok(LeagueApi::new(storage).handle(&request))
}
