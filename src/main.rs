//! Unified CLI for the CMS plugin configuration resolver
//!
//! This is the main binary that provides both resolve and check modes
//! through a unified command-line interface using subcommands.
//!
//! # Usage
//!
//! ## Resolve Mode
//! ```bash
//! cms-plugins --tier development --pretty
//! ```
//!
//! ## Check Mode
//! ```bash
//! cms-plugins check --tier production
//! ```
//!
//! ## Help and Version
//! ```bash
//! cms-plugins --version
//! cms-plugins --help
//! cms-plugins check --help
//! ```

use clap::{Parser, Subcommand};

use cms_plugins_config::cli::{
    check::{CheckArgs, run_check_mode},
    resolve::{ResolveArgs, run_resolve_mode},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "cms-plugins")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Resolve mode options (when no subcommand is provided)
    /// Deployment tier (development, production)
    #[arg(short, long, value_name = "TIER")]
    tier: Option<String>,

    /// Resolver settings file path
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<String>,

    /// Pretty-print the resolved configuration
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the resolved plugin configuration
    Check {
        /// Deployment tier (development, production)
        #[arg(short, long, value_name = "TIER")]
        tier: Option<String>,

        /// Resolver settings file path
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<String>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check {
            tier,
            config,
            verbose,
        }) => {
            // Check mode logic
            let args = CheckArgs {
                tier,
                config,
                verbose,
            };
            run_check_mode(args)
        }
        None => {
            // Resolve mode logic (default when no subcommand)
            let args = ResolveArgs {
                tier: cli.tier,
                config: cli.config,
                pretty: cli.pretty,
                verbose: cli.verbose,
            };
            run_resolve_mode(args)
        }
    }
}
