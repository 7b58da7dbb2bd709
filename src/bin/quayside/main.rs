//! Quayside CLI - Qt binding inspection for the uniform facade

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("quayside=debug")
    } else {
        EnvFilter::new("quayside=info")
    };

    // Logs go to stderr so `resolve` keeps stdout clean for scripts
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Probe => commands::probe::execute(),
        Commands::Resolve(args) => commands::resolve::execute(args),
        Commands::Versions(args) => commands::versions::execute(args),
    }
}
