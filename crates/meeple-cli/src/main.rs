//! meeple CLI - administrative tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply schema migrations
//! meeple-cli migrate
//!
//! # Report on the ADMIN_EMAILS allow-list and promote existing accounts
//! meeple-cli seed
//! ```

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "meeple-cli")]
#[command(author, version, about = "meeple CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply database schema migrations
    Migrate,
    /// Report on configured admin emails and promote existing accounts
    Seed,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::apply().await?,
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
