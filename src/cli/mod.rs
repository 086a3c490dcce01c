//! Command-line entry point: configuration resolution and command dispatch.

mod migrate;
mod parser;

pub use parser::{Cli, Commands};

use clap::Parser;

use crate::config::{ConfigLoader, Environment};
use crate::logger::init_logger;
use crate::server::Server;

/// Parses arguments, loads settings, initializes logging and runs the
/// selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let environment = cli.env.unwrap_or_else(Environment::from_env);
    let mut loader = ConfigLoader::new(environment);
    if let Some(path) = &cli.config {
        loader = loader.with_config_file(path);
    }
    let mut settings = loader.load()?;

    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }
    init_logger(&settings.logger)?;

    match cli.command.unwrap_or(Commands::Serve { dry_run: false }) {
        Commands::Serve { dry_run } => {
            settings.validate()?;
            if dry_run {
                println!("✓ Configuration is valid");
                println!("✓ Server would bind to: {}", settings.server.address());
                println!("Dry run completed successfully");
                return Ok(());
            }
            Server::new(settings).run().await
        }
        Commands::Migrate => {
            migrate::run_migrations(&settings).await?;
            Ok(())
        }
    }
}
