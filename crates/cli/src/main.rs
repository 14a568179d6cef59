//! Kennel CLI - Command-line interface for the dog training kennel
//!
//! Usage:
//!   kennel                              - Start interactive mode
//!   kennel dogs list [--search <q>]     - List dog profiles
//!   kennel programs list                - List training programs
//!   kennel sessions list [--status <s>] - List training sessions
//!   kennel sessions schedule <dog> <program> <when>

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{DogsCommand, Output, ProgramsCommand, SessionsCommand};
use cli::interactive::InteractiveCli;
use kennel_usecase::KennelContext;
use shared::KennelConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kennel")]
#[command(about = "Kennel - Dog profiles, training programs and sessions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a kennel.json config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage dog profiles
    Dogs(DogsCommand),
    /// Manage training programs
    Programs(ProgramsCommand),
    /// Schedule and track training sessions
    Sessions(SessionsCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = KennelConfig::load(cli.config.as_deref())?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "config loaded");

    let ctx = KennelContext::from_config(&config)?;
    let output = Output { json: cli.json };

    match cli.command {
        Some(Commands::Dogs(cmd)) => cmd.run(&ctx, output).await,
        Some(Commands::Programs(cmd)) => cmd.run(&ctx, output).await,
        Some(Commands::Sessions(cmd)) => cmd.run(&ctx, output).await,
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(ctx);
            interactive.run().await
        }
    }
}
