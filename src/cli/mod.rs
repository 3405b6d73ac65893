//! CLI module providing command-line interface functionality

pub mod commands;
pub mod handlers;

use anyhow::Result;
use clap::Parser;

pub use commands::{Cli, Commands};
pub use handlers::CommandHandler;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and execute the requested command
    pub async fn run() -> Result<()> {
        let cli = Cli::parse();

        Self::init_logging(cli.verbose);

        let handler = CommandHandler::new();
        handler.handle_command(cli.command).await
    }

    /// Initialize the logging subsystem based on verbosity
    fn init_logging(verbose: bool) {
        let log_level = if verbose { "debug" } else { "info" };

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(
                    log_level
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::INFO.into()),
                ),
            )
            .init();

        if verbose {
            tracing::debug!("Verbose logging enabled");
        }
    }
}
