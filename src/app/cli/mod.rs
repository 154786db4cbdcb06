//! CLI Adapter.

mod env;
mod provision;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sanity-provision")]
#[command(version)]
#[command(
    about = "Provision a Sanity studio backend for a Gatsby build",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or reuse a project, update sanity.json, install, deploy, and import content
    #[clap(visible_alias = "p")]
    Provision(provision::ProvisionArgs),
    /// Write .env.development and .env.production from the studio settings
    #[clap(visible_alias = "e")]
    Env(env::EnvArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Provision(args) => provision::run_provision(args),
        Commands::Env(args) => env::run_env(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
