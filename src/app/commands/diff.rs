//! Compare one template file against its counterparts in sibling projects.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{error, info};

use crate::app::AppContext;
use crate::domain::{AppError, SiblingGroup};
use crate::ports::{CommandRunner, FailurePolicy, Invocation};

#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// File to compare; only its base name is looked up in siblings.
    pub src: PathBuf,
    pub group: SiblingGroup,
    /// Directory containing the sibling projects.
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Sibling has no file with that name.
    Missing,
    /// The path exists but could not be read as a file.
    Unreadable { reason: String },
    Identical,
    /// Content differed and the viewer ran with this exit status.
    Viewed { status: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub project: String,
    pub target: PathBuf,
    pub outcome: DiffOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    pub entries: Vec<DiffEntry>,
}

impl DiffReport {
    pub fn projects(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.project.as_str()).collect()
    }

    pub fn missing(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter().filter(|entry| entry.outcome == DiffOutcome::Missing)
    }

    pub fn unreadable(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, DiffOutcome::Unreadable { .. }))
    }

    pub fn viewed(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter().filter(|entry| matches!(entry.outcome, DiffOutcome::Viewed { .. }))
    }
}

pub fn execute<R: CommandRunner>(
    ctx: &AppContext<R>,
    options: DiffOptions,
) -> Result<DiffReport, AppError> {
    let config = ctx.config();
    let src = std::path::absolute(&options.src)?;
    let root = std::path::absolute(&options.root)?;

    if !src.is_file() {
        return Err(AppError::MissingExpectedFile(src));
    }
    let file_name = src
        .file_name()
        .ok_or_else(|| AppError::invalid_input(format!("{} has no file name", src.display())))?;
    let (program, leading_args) = config
        .diff_tool
        .split_first()
        .ok_or_else(|| AppError::config_error("diff_tool must name a program"))?;

    let src_content = fs::read(&src)?;
    let mut report = DiffReport::default();

    for project in config.siblings.resolve(options.group) {
        let target = root.join(&project).join(file_name);

        if !target.exists() {
            error!("{}", AppError::FileNotFoundInTarget(target.clone()));
            report.entries.push(DiffEntry { project, target, outcome: DiffOutcome::Missing });
            continue;
        }

        let content = if target.is_file() {
            fs::read(&target)
        } else {
            Err(io::Error::other("not a regular file"))
        };
        let outcome = match content {
            Err(err) => {
                error!("Cannot read {}: {}", target.display(), err);
                DiffOutcome::Unreadable { reason: err.to_string() }
            }
            Ok(content) if content == src_content => {
                info!("No differences found in {}.", project);
                DiffOutcome::Identical
            }
            Ok(_) => {
                let args = leading_args
                    .iter()
                    .cloned()
                    .chain([src.display().to_string(), target.display().to_string()]);
                let invocation = Invocation::new(program, args, &root);
                let output = ctx.runner().run(&invocation, FailurePolicy::Lenient)?;
                DiffOutcome::Viewed { status: output.status }
            }
        };

        report.entries.push(DiffEntry { project, target, outcome });
    }

    Ok(report)
}
