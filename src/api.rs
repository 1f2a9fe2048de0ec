//! Transport-agnostic request handling over a `LeagueStorage`.
//!
//! Routes the league's REST paths to contract operations and maps the
//! results onto status codes and JSON bodies. Any web framework can wrap
//! `LeagueApi::handle`; no business logic lives here.

use crate::error::LeagueError;
use crate::storage::{LeagueStorage, Match, Player, SeedBundle, Team};
use crate::Result;
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;


/// HTTP verbs the league API understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl FromStr for Method {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(LeagueError::Request {
                message: format!("unsupported method `{other}`"),
            }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// An already-parsed request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn created(body: Value) -> Self {
        Self { status: 201, body }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    fn message(message: &str) -> Self {
        Self::ok(json!({ "message": message }))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The collections exposed under the API root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Courses,
    Teams,
    Players,
    Matches,
}

impl Collection {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "courses" => Some(Collection::Courses),
            "teams" => Some(Collection::Teams),
            "players" => Some(Collection::Players),
            "matches" => Some(Collection::Matches),
            _ => None,
        }
    }

    fn entity(self) -> &'static str {
        match self {
            Collection::Courses => "Course",
            Collection::Teams => "Team",
            Collection::Players => "Player",
            Collection::Matches => "Match",
        }
    }
}

enum Route<'a> {
    Collection(Collection),
    Item(Collection, &'a str),
    Initialize,
    Status,
}

fn parse_route(path: &str) -> Option<Route<'_>> {
    let trimmed = path.trim_matches('/');
    let trimmed = trimmed
        .strip_prefix("api")
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(trimmed);

    let segments: Vec<&str> = trimmed.split('/').collect();
    match segments.as_slice() {
        ["initialize"] => Some(Route::Initialize),
        ["status"] => Some(Route::Status),
        [collection] => Collection::from_segment(collection).map(Route::Collection),
        [collection, id] if !id.is_empty() => {
            Collection::from_segment(collection).map(|c| Route::Item(c, *id))
        }
        _ => None,
    }
}

/// Request handler holding the storage it was constructed with
pub struct LeagueApi<S> {
    storage: S,
}

impl<S: LeagueStorage> LeagueApi<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Route one request and map its outcome to a response
    pub fn handle(&self, request: &ApiRequest) -> ApiResponse {
        match self.dispatch(request) {
            Ok(response) => response,
            Err(err) => {
                error!(
                    "event=request module=api status=error method={} path={} error={}",
                    request.method, request.path, err
                );
                ApiResponse::error(500, err.to_string())
            }
        }
    }

    fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let Some(route) = parse_route(&request.path) else {
            return Ok(ApiResponse::error(404, "Not found"));
        };

        match (route, request.method) {
            (Route::Status, Method::Get) => {
                let initialized = self.storage.is_initialized()?;
                Ok(ApiResponse::ok(json!({ "initialized": initialized })))
            }
            (Route::Initialize, Method::Post) => Ok(self.initialize(request.body.as_ref())),
            (Route::Collection(collection), Method::Get) => self.list(collection),
            (Route::Collection(Collection::Courses), Method::Post)
            | (Route::Item(Collection::Courses, _), Method::Put | Method::Delete) => {
                Ok(method_not_allowed())
            }
            (Route::Collection(collection), Method::Post) => {
                self.create(collection, required_body(request)?)
            }
            (Route::Item(collection, id), Method::Get) => self.get(collection, id),
            (Route::Item(collection, id), Method::Put) => {
                self.update(collection, id, required_body(request)?)
            }
            (Route::Item(collection, id), Method::Delete) => self.delete(collection, id),
            _ => Ok(method_not_allowed()),
        }
    }

    fn initialize(&self, body: Option<&Value>) -> ApiResponse {
        // A missing or malformed bundle fails the same way as a failed load
        let bundle = match body.cloned().map(serde_json::from_value::<SeedBundle>) {
            Some(Ok(bundle)) => bundle,
            Some(Err(err)) => {
                error!("event=seed module=api status=error error={}", err);
                return ApiResponse::error(500, "Failed to initialize database");
            }
            None => {
                error!("event=seed module=api status=error error=missing body");
                return ApiResponse::error(500, "Failed to initialize database");
            }
        };

        if self.storage.initialize_data(&bundle) {
            ApiResponse::message("Database initialized successfully")
        } else {
            ApiResponse::error(500, "Failed to initialize database")
        }
    }

    fn list(&self, collection: Collection) -> Result<ApiResponse> {
        let body = match collection {
            Collection::Courses => to_body(&self.storage.list_courses()?)?,
            Collection::Teams => to_body(&self.storage.list_teams()?)?,
            Collection::Players => to_body(&self.storage.list_players()?)?,
            Collection::Matches => to_body(&self.storage.list_matches()?)?,
        };
        Ok(ApiResponse::ok(body))
    }

    fn get(&self, collection: Collection, id: &str) -> Result<ApiResponse> {
        let found = match collection {
            Collection::Courses => self.storage.get_course(id)?.map(|c| to_body(&c)),
            Collection::Teams => self.storage.get_team(id)?.map(|t| to_body(&t)),
            Collection::Players => self.storage.get_player(id)?.map(|p| to_body(&p)),
            Collection::Matches => self.storage.get_match(id)?.map(|m| to_body(&m)),
        };

        match found.transpose()? {
            Some(body) => Ok(ApiResponse::ok(body)),
            None => Ok(not_found(collection)),
        }
    }

    fn create(&self, collection: Collection, body: Value) -> Result<ApiResponse> {
        let created = match collection {
            Collection::Teams => to_body(&self.storage.create_team(&from_body::<Team>(body)?)?)?,
            Collection::Players => {
                to_body(&self.storage.create_player(&from_body::<Player>(body)?)?)?
            }
            Collection::Matches => {
                to_body(&self.storage.create_match(&from_body::<Match>(body)?)?)?
            }
            Collection::Courses => return Ok(method_not_allowed()),
        };
        Ok(ApiResponse::created(created))
    }

    fn update(&self, collection: Collection, id: &str, body: Value) -> Result<ApiResponse> {
        let body = with_path_id(body, id);
        let updated = match collection {
            Collection::Teams => {
                to_body(&self.storage.update_team(id, &from_body::<Team>(body)?)?)?
            }
            Collection::Players => {
                to_body(&self.storage.update_player(id, &from_body::<Player>(body)?)?)?
            }
            Collection::Matches => {
                to_body(&self.storage.update_match(id, &from_body::<Match>(body)?)?)?
            }
            Collection::Courses => return Ok(method_not_allowed()),
        };
        Ok(ApiResponse::ok(updated))
    }

    fn delete(&self, collection: Collection, id: &str) -> Result<ApiResponse> {
        let removed = match collection {
            Collection::Teams => self.storage.delete_team(id)?,
            Collection::Players => self.storage.delete_player(id)?,
            Collection::Matches => self.storage.delete_match(id)?,
            Collection::Courses => return Ok(method_not_allowed()),
        };

        if removed {
            Ok(ApiResponse::message(&format!("{} deleted", collection.entity())))
        } else {
            Ok(not_found(collection))
        }
    }
}

fn method_not_allowed() -> ApiResponse {
    ApiResponse::error(405, "Method not allowed")
}

fn not_found(collection: Collection) -> ApiResponse {
    ApiResponse::error(404, format!("{} not found", collection.entity()))
}

fn required_body(request: &ApiRequest) -> Result<Value> {
    request.body.clone().ok_or_else(|| LeagueError::Request {
        message: format!("{} {} requires a JSON body", request.method, request.path),
    })
}

/// Update bodies may omit `id`; the path id always wins
fn with_path_id(mut body: Value, id: &str) -> Value {
    if let Value::Object(map) = &mut body {
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
    body
}

fn from_body<T: DeserializeOwned>(body: Value) -> Result<T> {
    Ok(serde_json::from_value(body)?)
}

fn to_body<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
