//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::{bail, Context, Result};
use clap::Parser;
use flexi_logger::Logger;
use golf_league::{
    cli::{Commands, GolfLeague},
    commands::{
        handle_delete, handle_get, handle_list, handle_request, handle_seed, handle_status,
        SeedOutcome,
    },
    storage::{resolve_database_path, SqliteStorage},
};
use serde_json::Value;

/// Run the CLI.
fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .start()
        .context("failed to start logger")?;

    let app = GolfLeague::parse();

    let db_path = resolve_database_path(app.db)?;
    let storage = SqliteStorage::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    match app.command {
        Commands::Status => print_json(&handle_status(&storage)?)?,

        Commands::Seed { file, if_empty } => match handle_seed(&storage, &file, if_empty)
            .with_context(|| format!("failed to seed from {}", file.display()))?
        {
            SeedOutcome::Loaded { records } => {
                println!("✓ Loaded {} records into {}", records, db_path.display())
            }
            SeedOutcome::AlreadyInitialized => {
                println!("Database already initialized, skipping seed")
            }
        },

        Commands::List { entity } => print_json(&handle_list(&storage, entity)?)?,

        Commands::Get { entity, id } => match handle_get(&storage, entity, &id)? {
            Some(record) => print_json(&record)?,
            None => bail!("{} not found", entity),
        },

        Commands::Delete { entity, id } => {
            if handle_delete(&storage, entity, &id)? {
                println!("{} deleted", entity);
            } else {
                bail!("{} not found", entity);
            }
        }

        Commands::Request { method, path, body } => {
            let response = handle_request(&storage, method, &path, body.as_deref())?;
            println!("{}", response.status);
            print_json(&response.body)?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
