//! # quest-cli
//!
//! Command-line driver for the Eternal Quest goal ledger.
//!
//! Every command works on the project's working ledger in `.quest/`:
//! - `quest create/list/record/score` — manage goals and report progress
//! - `quest save/load` — copy the working ledger to or from another file

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::QuestConfig;

/// Eternal Quest — track goals and earn points.
#[derive(Parser)]
#[command(name = "quest", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new goal.
    Create(commands::goal::CreateArgs),
    /// List goals with their completion status.
    List {
        /// Print goals as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Record an event against a goal.
    Record {
        /// Goal number as shown by `quest list`.
        position: usize,
    },
    /// Show the current score.
    Score,
    /// Save the working ledger to a file.
    Save {
        /// Destination file.
        file: PathBuf,
    },
    /// Replace the working ledger with one loaded from a file.
    Load {
        /// Source file.
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);

    let defaults = QuestConfig::for_project(&project_root);
    let (config, config_error) = match defaults.clone().with_file_overrides() {
        Ok(config) => (config, None),
        Err(e) => (defaults, Some(e.to_string())),
    };

    // Logs go to stderr so they don't mix with command output.
    let (filter, filter_error) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => config.env_filter(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Some(e) = config_error {
        tracing::warn!(
            "ignoring invalid config at {}: {}",
            config.config_file.display(),
            e
        );
    }
    if let Some(e) = filter_error {
        tracing::warn!("{}; using {:?}", e, config::DEFAULT_LOG_FILTER);
    }
    tracing::debug!("ledger file: {}", config.ledger_file.display());

    match &cli.command {
        Commands::Create(args) => commands::goal::create(&config, args),
        Commands::List { json } => commands::goal::list(&config, *json),
        Commands::Record { position } => commands::goal::record(&config, *position).map(|_| ()),
        Commands::Score => commands::goal::score(&config).map(|_| ()),
        Commands::Save { file } => commands::ledger::save(&config, file),
        Commands::Load { file } => commands::ledger::load(&config, file).map(|_| ()),
    }
}
