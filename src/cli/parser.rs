//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shadow_rs::shadow;
shadow!(build);

use crate::config::Environment;

/// Board-game community API server
#[derive(Parser, Debug)]
#[command(name = "boardgamers")]
#[command(about = "Board-game community API server")]
#[command(long_about = "
Backend for a board-game community: accounts, game reviews, favorites,
and question boards.

EXAMPLES:
    # Start the server with the layered configuration
    boardgamers serve

    # Use an explicit configuration file
    boardgamers --config /etc/boardgamers/production.toml serve

    # Check configuration without starting the server
    boardgamers serve --dry-run

    # Apply pending database migrations
    boardgamers migrate
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path, layered on top of the config directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection (development, test, production)
    #[arg(short, long)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
    /// Apply pending database migrations
    Migrate,
}
