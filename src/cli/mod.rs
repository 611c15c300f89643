//! CLI module
//!
//! Provides command-line interface for:
//! - serve: run the in-memory hero backend over HTTP
//! - list, dashboard, get, search, add, rename, delete: one gateway
//!   operation against the backend, printed as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, ClientArgs, Command};
pub use commands::{execute, execute_to, perform, run, run_command, serve, HeroAction};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_failure, write_json, write_response};
