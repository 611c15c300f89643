//! CLI argument definitions using clap
//!
//! Commands:
//! - heroes serve [--config <path>] [--port <port>]
//! - heroes list|dashboard [--config <path>] [--in-memory]
//! - heroes get <id> | search <term> | add <name> | rename <id> <name> | delete <id>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::hero::HeroId;

/// heroes - hero roster backend and client
#[derive(Parser, Debug)]
#[command(name = "heroes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every client command
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Path to configuration file
    #[arg(long, default_value = "./heroes.json")]
    pub config: PathBuf,

    /// Run against a fresh in-process backend instead of client.base_url
    #[arg(long)]
    pub in_memory: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the in-memory hero backend over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./heroes.json")]
        config: PathBuf,

        /// Override server.port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List all heroes
    List {
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Show the top heroes
    Dashboard {
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Fetch one hero by id
    Get {
        id: HeroId,
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Find heroes whose name contains a term
    Search {
        term: String,
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Add a hero
    Add {
        name: String,
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Rename a hero
    Rename {
        id: HeroId,
        name: String,
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Delete a hero
    Delete {
        id: HeroId,
        #[command(flatten)]
        client: ClientArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
