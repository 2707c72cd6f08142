use std::path::PathBuf;

use clap::Args;

use super::GlobalArgs;
use crate::app::api::{self, DiffOptions};
use crate::app::logging::LogSettings;
use crate::domain::{AppError, SiblingGroup};

#[derive(Args)]
pub(super) struct DiffArgs {
    /// Source file to diff
    #[arg(long)]
    src: PathBuf,
    /// Group of sibling projects to diff against
    #[arg(long, default_value = "all", value_parser = ["all", "libs", "clis"])]
    group: String,
    /// Root directory of the sibling projects (default: parent of the current directory)
    #[arg(long)]
    root: Option<PathBuf>,
}

pub(super) fn run_diff(globals: &GlobalArgs, args: DiffArgs) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let config = api::load_config(globals.config.as_deref(), &cwd)?;

    LogSettings::new(globals.log_level, globals.log_file.clone())
        .with_default_file(config.log_to_file)
        .install()?;

    let group = SiblingGroup::from_name(&args.group)
        .ok_or_else(|| AppError::invalid_input(format!("unknown group '{}'", args.group)))?;
    let root = match args.root {
        Some(root) => root,
        None => cwd
            .parent()
            .map(|parent| parent.to_path_buf())
            .ok_or_else(|| AppError::config_error("Current directory has no parent"))?,
    };

    let report = api::diff_file(config, DiffOptions { src: args.src, group, root })?;
    let missing = report.missing().count();
    let unreadable = report.unreadable().count();
    let viewed = report.viewed().count();
    println!(
        "✅ Compared {} project(s): {} differed, {} missing the file, {} unreadable",
        report.entries.len(),
        viewed,
        missing,
        unreadable
    );
    Ok(())
}
