use std::path::PathBuf;

use clap::Args;

use super::GlobalArgs;
use crate::app::api::{self, CloneOptions};
use crate::app::logging::LogSettings;
use crate::domain::{AppError, Visibility};

#[derive(Args)]
pub(super) struct CloneArgs {
    /// Name of the new project (prompted for when omitted)
    name: Option<String>,
    /// Name of the new project, as a flag
    #[arg(long = "name", conflicts_with = "name")]
    name_flag: Option<String>,
    /// Do not create a remote repository, only initialize git locally
    #[arg(long)]
    local_only: bool,
    /// Template directory to copy (default: current directory)
    #[arg(long)]
    template: Option<PathBuf>,
    /// Directory the new project is created in (default: the template's parent)
    #[arg(long)]
    projects_root: Option<PathBuf>,
    /// Remote repository visibility (default from config: private)
    #[arg(long, value_parser = ["public", "private"])]
    visibility: Option<String>,
}

pub(super) fn run_clone(globals: &GlobalArgs, args: CloneArgs) -> Result<(), AppError> {
    let template_dir = match args.template {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let config = api::load_config(globals.config.as_deref(), &template_dir)?;

    LogSettings::new(globals.log_level, globals.log_file.clone())
        .with_default_file(config.log_to_file)
        .install()?;

    let visibility = match args.visibility {
        Some(value) => Some(
            Visibility::from_name(&value)
                .ok_or_else(|| AppError::invalid_input(format!("unknown visibility '{}'", value)))?,
        ),
        None => None,
    };

    let options = CloneOptions {
        name: args.name.or(args.name_flag),
        template_dir,
        projects_root: args.projects_root,
        local_only: args.local_only,
        visibility,
    };

    let outcome = api::clone_project(config, options)?;
    println!("✅ Created {} at {}/", outcome.name, outcome.target_dir.display());
    Ok(())
}
