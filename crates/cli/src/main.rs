//! Demochat CLI
//!
//! Main entry point for the demochat backend.
//! Serves the mock RAG chat API and exposes the assistant from the command line.

mod commands;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use commands::{AskCommand, SearchCommand, ServeCommand};
use demochat_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Demochat - mock retrieval-augmented chat backend
#[derive(Parser, Debug)]
#[command(name = "demochat")]
#[command(about = "Mock retrieval-augmented chat backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: ./demochat.yaml if present)
    #[arg(short, long, global = true, env = "DEMOCHAT_CONFIG")]
    config: Option<PathBuf>,

    /// Address for the HTTP API (e.g. 127.0.0.1:8000)
    #[arg(short, long, global = true, env = "DEMOCHAT_BIND")]
    bind: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (any non-empty `NO_COLOR` value also disables it)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP chat API
    Serve(ServeCommand),

    /// Ask the assistant a single question
    Ask(AskCommand),

    /// Rank the corpus against a query and show scores
    Search(SearchCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Defaults merged with the config file; clap has already folded the
    // environment into the CLI values.
    let config = AppConfig::load_from(cli.config.as_deref())?.with_overrides(
        cli.bind,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Demochat starting");
    tracing::debug!("Config file: {:?}", config.config_file);
    tracing::debug!("Bind address: {}", config.bind_addr);

    let command_name = match &cli.command {
        Commands::Serve(_) => "serve",
        Commands::Ask(_) => "ask",
        Commands::Search(_) => "search",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Serve(cmd) => cmd.execute(&config).await,
        Commands::Ask(cmd) => cmd.execute().await,
        Commands::Search(cmd) => cmd.execute().await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
