//! Unit tests for storage functionality

use super::*;
use serde_json::json;
use tempfile::TempDir;

fn create_test_storage() -> (TempDir, SqliteStorage) {
    let dir = TempDir::new().unwrap();
    let storage = SqliteStorage::open(dir.path().join("league.db")).unwrap();
    (dir, storage)
}

fn column_names(storage: &SqliteStorage, table: &str) -> Vec<String> {
    let conn = storage.connect().unwrap();
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<rusqlite::Result<Vec<_>>>()
        .unwrap();
    names
}

fn test_match(id: &str) -> Match {
    Match {
        id: id.to_string(),
        date: "2024-05-14".to_string(),
        day: "Tuesday".to_string(),
        team1_id: "t1".to_string(),
        team2_id: "t2".to_string(),
        completed: false,
        winner_id: None,
        score: None,
        scores: Vec::new(),
    }
}

#[test]
fn test_schema_creates_all_tables() {
    let (_dir, storage) = create_test_storage();

    assert_eq!(column_names(&storage, "courses"), ["id", "name", "holes"]);
    assert_eq!(column_names(&storage, "teams"), ["id", "name", "day"]);
    assert_eq!(
        column_names(&storage, "players"),
        ["id", "name", "team_id", "handicap", "history"]
    );
    assert_eq!(
        column_names(&storage, "matches"),
        [
            "id",
            "date",
            "day",
            "team1_id",
            "team2_id",
            "completed",
            "winner_id",
            "score",
            "scores"
        ]
    );
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let (dir, storage) = create_test_storage();
    storage
        .create_team(&Team {
            id: "t1".to_string(),
            name: "Eagles".to_string(),
            day: "Mon".to_string(),
        })
        .unwrap();

    // Reopening runs CREATE TABLE IF NOT EXISTS again without losing rows
    let reopened = SqliteStorage::open(dir.path().join("league.db")).unwrap();
    assert_eq!(reopened.list_teams().unwrap().len(), 1);
}

#[test]
fn test_open_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("league.db");

    let storage = SqliteStorage::open(&path).unwrap();

    assert!(path.exists());
    assert_eq!(storage.path(), path.as_path());
}

#[test]
fn test_foreign_keys_are_declared_but_not_enforced() {
    let (_dir, storage) = create_test_storage();

    let player = Player {
        id: "p1".to_string(),
        name: "Orphan".to_string(),
        team_id: "no-such-team".to_string(),
        handicap: 3,
        history: Vec::new(),
    };

    assert!(storage.create_player(&player).is_ok());
}

#[test]
fn test_completed_flag_stored_as_integer() {
    let (_dir, storage) = create_test_storage();
    let mut game = test_match("m1");
    game.completed = true;
    storage.create_match(&game).unwrap();

    let conn = storage.connect().unwrap();
    let stored: i64 = conn
        .query_row("SELECT completed FROM matches WHERE id = 'm1'", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(stored, 1);
}

#[test]
fn test_sub_records_stored_as_json_text() {
    let (_dir, storage) = create_test_storage();
    let player = Player {
        id: "p1".to_string(),
        name: "Alice".to_string(),
        team_id: "t1".to_string(),
        handicap: 12,
        history: vec![json!({"date": "2024-05-07", "score": 85, "handicapAfter": 13})],
    };
    storage.create_player(&player).unwrap();

    let conn = storage.connect().unwrap();
    let stored: String = conn
        .query_row("SELECT history FROM players WHERE id = 'p1'", [], |row| {
            row.get(0)
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(
        parsed,
        json!([{"date": "2024-05-07", "score": 85, "handicapAfter": 13}])
    );
}

#[test]
fn test_null_and_empty_columns_read_as_absent() {
    let (_dir, storage) = create_test_storage();
    let conn = storage.connect().unwrap();
    conn.execute(
        "INSERT INTO matches (id, date, day, team1_id, team2_id, completed, winner_id, score, scores)
         VALUES ('m1', '2024-05-14', 'Tuesday', 't1', 't2', NULL, '', '', NULL)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO players (id, name, team_id, handicap, history)
         VALUES ('p1', 'Legacy', 't1', 9, NULL)",
        [],
    )
    .unwrap();

    let game = storage.get_match("m1").unwrap().unwrap();
    assert!(!game.completed);
    assert_eq!(game.winner_id, None);
    assert_eq!(game.score, None);
    assert!(game.scores.is_empty());

    let player = storage.get_player("p1").unwrap().unwrap();
    assert!(player.history.is_empty());
}

#[test]
fn test_nonzero_completed_reads_as_true() {
    let (_dir, storage) = create_test_storage();
    let conn = storage.connect().unwrap();
    conn.execute(
        "INSERT INTO matches (id, date, day, team1_id, team2_id, completed)
         VALUES ('m1', '2024-05-14', 'Tuesday', 't1', 't2', 2)",
        [],
    )
    .unwrap();

    assert!(storage.get_match("m1").unwrap().unwrap().completed);
}

#[test]
fn test_corrupt_sub_record_text_is_an_error() {
    let (_dir, storage) = create_test_storage();
    let conn = storage.connect().unwrap();
    conn.execute(
        "INSERT INTO courses (id, name, holes) VALUES ('c1', 'Broken', 'not json')",
        [],
    )
    .unwrap();

    match storage.get_course("c1") {
        Err(crate::LeagueError::Json(_)) => (),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn test_encode_decode_lists() {
    let holes = vec![
        json!({"number": 1, "par": 4, "handicap": 7}),
        json!({"number": 2, "par": 5, "handicap": 1}),
    ];

    let encoded = encode_list(&holes).unwrap();
    assert_eq!(decode_list(Some(&encoded)).unwrap(), holes);

    assert_eq!(encode_list(&[]).unwrap(), "[]");
    assert!(decode_list(Some("[]")).unwrap().is_empty());
    assert!(decode_list(Some("")).unwrap().is_empty());
    assert!(decode_list(None).unwrap().is_empty());
}

#[test]
fn test_failed_seed_rolls_back_earlier_statements() {
    let (_dir, storage) = create_test_storage();

    // Drop the matches table so the final section of the bundle fails
    storage
        .connect()
        .unwrap()
        .execute("DROP TABLE matches", [])
        .unwrap();

    let bundle = SeedBundle {
        teams: vec![Team {
            id: "t1".to_string(),
            name: "Eagles".to_string(),
            day: "Mon".to_string(),
        }],
        matches: vec![test_match("m1")],
        ..SeedBundle::default()
    };

    assert!(!storage.initialize_data(&bundle));
    assert!(storage.list_teams().unwrap().is_empty());
}

#[test]
fn test_busy_timeout_is_configurable() {
    let (_dir, storage) = create_test_storage();
    let storage = storage.with_busy_timeout(std::time::Duration::from_millis(50));

    assert!(storage.is_initialized().is_ok());
}

#[test]
fn test_seed_bundle_len() {
    let bundle = SeedBundle {
        teams: vec![Team {
            id: "t1".to_string(),
            name: "Eagles".to_string(),
            day: "Mon".to_string(),
        }],
        matches: vec![test_match("m1"), test_match("m2")],
        ..SeedBundle::default()
    };

    assert_eq!(bundle.len(), 3);
    assert!(!bundle.is_empty());
    assert!(SeedBundle::default().is_empty());
}

#[test]
fn test_json_null_text_reads_as_empty_sequence() {
    let (_dir, storage) = create_test_storage();
    let conn = storage.connect().unwrap();
    conn.execute(
        "INSERT INTO players (id, name, team_id, handicap, history)
         VALUES ('p1', 'Legacy', 't1', 9, 'null')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO courses (id, name, holes) VALUES ('c1', 'Old Links', 'null')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO matches (id, date, day, team1_id, team2_id, scores)
         VALUES ('m1', '2024-05-14', 'Tuesday', 't1', 't2', 'null')",
        [],
    )
    .unwrap();

    assert!(storage.get_player("p1").unwrap().unwrap().history.is_empty());
    assert!(storage.list_players().unwrap()[0].history.is_empty());
    assert!(storage.get_course("c1").unwrap().unwrap().holes.is_empty());
    assert!(storage.get_match("m1").unwrap().unwrap().scores.is_empty());
    assert!(decode_list(Some("null")).unwrap().is_empty());
}

#[test]
fn test_fractional_numbers_survive_storage() {
    let (_dir, storage) = create_test_storage();
    let history = vec![json!({
        "date": "2024-05-14",
        "score": 1.0715660391465826e-75,
        "handicapAfter": 12.7
    })];

    let player = Player {
        id: "p1".to_string(),
        name: "Precise".to_string(),
        team_id: "t1".to_string(),
        handicap: 12,
        history: history.clone(),
    };
    storage.create_player(&player).unwrap();

    assert_eq!(storage.get_player("p1").unwrap().unwrap().history, history);
    assert_eq!(
        decode_list(Some(&encode_list(&history).unwrap())).unwrap(),
        history
    );
}

#[test]
fn test_blank_winner_and_score_are_absent_in_returned_match() {
    let (_dir, storage) = create_test_storage();
    storage.create_match(&test_match("m1")).unwrap();

    let blank = Match {
        completed: true,
        winner_id: Some(String::new()),
        score: Some(String::new()),
        ..test_match("m1")
    };

    let updated = storage.update_match("m1", &blank).unwrap();
    assert_eq!(updated.winner_id, None);
    assert_eq!(updated.score, None);
    assert_eq!(storage.get_match("m1").unwrap().unwrap(), updated);

    let created = storage
        .create_match(&Match {
            id: "m2".to_string(),
            ..blank
        })
        .unwrap();
    assert_eq!(created.winner_id, None);
    assert_eq!(storage.get_match("m2").unwrap().unwrap(), created);
}

#[test]
fn test_seed_accepts_dangling_references() {
    let (_dir, storage) = create_test_storage();
    let bundle = SeedBundle {
        players: vec![Player {
            id: "p1".to_string(),
            name: "Free Agent".to_string(),
            team_id: "unlisted".to_string(),
            handicap: 20,
            history: Vec::new(),
        }],
        matches: vec![Match {
            winner_id: Some("t9".to_string()),
            completed: true,
            ..test_match("m1")
        }],
        ..SeedBundle::default()
    };

    assert!(storage.initialize_data(&bundle));
    assert_eq!(
        storage.get_player("p1").unwrap().unwrap().team_id,
        "unlisted"
    );
    assert_eq!(
        storage.get_match("m1").unwrap().unwrap().winner_id.as_deref(),
        Some("t9")
    );
}
