//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};

use quayside::QtApi;

/// Quayside - A uniform facade over the Python Qt bindings
#[derive(Parser)]
#[command(name = "quayside")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe which Qt bindings are importable
    Probe,

    /// Resolve which Qt binding would be used
    Resolve(ResolveArgs),

    /// Show version details for the resolved binding
    Versions(VersionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Qt API to use, bypassing configuration and auto-detection
    #[arg(long)]
    pub api: Option<QtApi>,
}

#[derive(Args)]
pub struct VersionsArgs {
    /// Qt API to use, bypassing configuration and auto-detection
    #[arg(long)]
    pub api: Option<QtApi>,
}
