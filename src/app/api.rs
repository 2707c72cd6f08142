//! API Facade for the application.
//!
//! This module wires the process-backed adapters into the commands.

use std::path::Path;

use crate::adapters::{DialoguerPrompt, ProcessCommandRunner};
use crate::app::{AppContext, commands};

pub use crate::app::commands::clone::{CloneOptions, CloneOutcome};
pub use crate::app::commands::diff::{DiffEntry, DiffOptions, DiffOutcome, DiffReport};
pub use crate::domain::{AppError, SiblingGroup, StencilConfig, Visibility};

/// Load configuration for a template directory, honouring an explicit path.
pub fn load_config(
    explicit: Option<&Path>,
    template_dir: &Path,
) -> Result<StencilConfig, AppError> {
    crate::app::config::load_config(explicit, template_dir)
}

/// Clone the template into a new project, prompting on the terminal for a
/// missing name.
pub fn clone_project(
    config: StencilConfig,
    options: CloneOptions,
) -> Result<CloneOutcome, AppError> {
    let ctx = AppContext::new(ProcessCommandRunner::new(), config);
    commands::clone::execute(&ctx, &DialoguerPrompt::new(), options)
}

/// Diff one file against its counterparts in the sibling projects.
pub fn diff_file(config: StencilConfig, options: DiffOptions) -> Result<DiffReport, AppError> {
    let ctx = AppContext::new(ProcessCommandRunner::new(), config);
    commands::diff::execute(&ctx, options)
}
