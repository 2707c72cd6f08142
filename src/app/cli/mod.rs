//! CLI Adapter.

mod clone;
mod diff;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::logging::LogLevel;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(version)]
#[command(
    about = "Bootstrap projects from a template and diff shared files across siblings",
    long_about = None
)]
struct Cli {
    /// Console log level
    #[arg(long, global = true, value_enum, ignore_case = true, default_value = "INFO")]
    log_level: LogLevel,
    /// Also write a DEBUG-level log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Configuration file (default: stencil.toml in the template directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the template to a new project, rename it and initialize git
    #[clap(visible_alias = "c")]
    Clone(clone::CloneArgs),
    /// Diff a template file against the same-named file in sibling projects
    #[clap(visible_alias = "d")]
    Diff(diff::DiffArgs),
}

/// Shared logging flags, resolved by each subcommand once config is loaded.
struct GlobalArgs {
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    config: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let globals =
        GlobalArgs { log_level: cli.log_level, log_file: cli.log_file, config: cli.config };

    let result: Result<(), AppError> = match cli.command {
        Commands::Clone(args) => clone::run_clone(&globals, args),
        Commands::Diff(args) => diff::run_diff(&globals, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
