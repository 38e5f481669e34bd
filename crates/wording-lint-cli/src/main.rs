//! wording-lint CLI tool.
//!
//! Usage:
//! ```bash
//! wording-lint check [OPTIONS] [PATH]
//! wording-lint list-rules
//! wording-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Wording linter for RSpec example descriptions
#[derive(Parser)]
#[command(name = "wording-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks
    Check {
        /// Directory or file to analyze (default: `[analyzer] root` from the
        /// config, else the current directory)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Rewrite offending descriptions in place
        #[arg(long)]
        fix: bool,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output with source snippets.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            fix,
            rules,
            exclude,
        } => {
            let project_dir = match &path {
                Some(p) if p.is_file() => p.parent().map(PathBuf::from).unwrap_or_default(),
                Some(p) => p.clone(),
                None => PathBuf::from("."),
            };
            let source = config_resolver::resolve(&project_dir, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                fix,
                rules_filter: rules,
                exclude,
            };
            let failed = commands::check::run(path.as_deref(), &options, &source)?;
            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
