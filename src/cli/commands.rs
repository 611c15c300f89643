//! CLI command implementations
//!
//! `serve` runs the in-memory backend until interrupted. Every other
//! command runs one gateway operation and prints its outcome; a failed
//! operation still prints the fallback value, then exits non-zero.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::app::App;
use crate::backend::BackendServer;
use crate::config::Config;
use crate::gateway::Outcome;
use crate::hero::{HeroId, NewHero};
use crate::observability::{log_event_with_fields, Event, Logger};

use super::args::{ClientArgs, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_failure, write_response};

/// One client-side operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroAction {
    List,
    Dashboard,
    Get(HeroId),
    Search(String),
    Add(String),
    Rename(HeroId, String),
    Delete(HeroId),
}

/// Parse args and run
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::List { client } => execute(HeroAction::List, &client),
        Command::Dashboard { client } => execute(HeroAction::Dashboard, &client),
        Command::Get { id, client } => execute(HeroAction::Get(id), &client),
        Command::Search { term, client } => execute(HeroAction::Search(term), &client),
        Command::Add { name, client } => execute(HeroAction::Add(name), &client),
        Command::Rename { id, name, client } => execute(HeroAction::Rename(id, name), &client),
        Command::Delete { id, client } => execute(HeroAction::Delete(id), &client),
    }
}

/// Load configuration and apply the log level
fn load_config(path: &Path) -> CliResult<Config> {
    let config = Config::load(path)?;
    Logger::set_min_severity(config.log.severity()?);
    log_event_with_fields(Event::ConfigLoaded, &[("path", path.display().to_string().as_str())]);
    Ok(config)
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Serve the in-memory backend until ctrl-c
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config
            .server
            .validate()
            .map_err(CliError::config_error)?;
    }

    let server = BackendServer::with_config(config.server);

    runtime()?.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Run one gateway operation and print the outcome on stdout
pub fn execute(action: HeroAction, args: &ClientArgs) -> CliResult<()> {
    let stdout = io::stdout();
    execute_to(action, args, &mut stdout.lock())
}

/// Run one gateway operation and write the outcome to `out`
pub fn execute_to<W: Write>(action: HeroAction, args: &ClientArgs, out: &mut W) -> CliResult<()> {
    let config = load_config(&args.config)?;

    let app = if args.in_memory {
        App::in_process(&BackendServer::with_config(config.server.clone()))
    } else {
        App::from_config(&config)?
    };

    let outcome = runtime()?.block_on(perform(&app, action))?;
    report(out, outcome, &app.messages().messages())
}

/// Perform `action` and return its JSON value and failure, if any
pub async fn perform(app: &App, action: HeroAction) -> CliResult<Outcome<Value>> {
    let gateway = app.gateway();
    let outcome = match action {
        HeroAction::List => to_json(gateway.list_all().await)?,
        HeroAction::Dashboard => {
            let mut dashboard = app.dashboard();
            dashboard.load().await;
            let top = serde_json::to_value(dashboard.top_heroes())?;
            match dashboard.last_error() {
                Some(err) => Outcome::failure(top, err.clone()),
                None => Outcome::success(top),
            }
        }
        HeroAction::Get(id) => to_json(gateway.get_by_id(id).await)?,
        HeroAction::Search(term) => to_json(gateway.search(&term).await)?,
        HeroAction::Add(name) => {
            let hero = NewHero::new(&name)?;
            to_json(gateway.create(&hero).await)?
        }
        HeroAction::Rename(id, name) => {
            let mut detail = app.detail();
            detail.load(id).await;
            if let Some(err) = detail.last_error() {
                return Ok(Outcome::failure(Value::Null, err.clone()));
            }
            detail.rename(&name)?;
            let saved = detail.save().await;
            let hero = serde_json::to_value(detail.hero())?;
            saved.map(|_| hero)
        }
        HeroAction::Delete(id) => gateway.remove(id).await.map(|_| Value::Null),
    };
    Ok(outcome)
}

fn to_json<T: Serialize>(outcome: Outcome<T>) -> CliResult<Outcome<Value>> {
    let (value, error) = outcome.into_parts();
    let value = serde_json::to_value(value)?;
    Ok(match error {
        Some(err) => Outcome::failure(value, err),
        None => Outcome::success(value),
    })
}

fn report<W: Write>(out: &mut W, outcome: Outcome<Value>, messages: &[String]) -> CliResult<()> {
    let (data, error) = outcome.into_parts();
    match error {
        None => write_response(out, data, messages),
        Some(err) => {
            write_failure(out, data, &err, messages)?;
            Err(CliError::request_failed(&err))
        }
    }
}
