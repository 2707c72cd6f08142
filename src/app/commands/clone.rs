//! Create a new project from the template directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::adapters::project_tree::{self, SubstitutionReport};
use crate::app::AppContext;
use crate::domain::{AppError, ProjectName, Visibility};
use crate::ports::{CommandRunner, FailurePolicy, Invocation, NamePrompt};

const NAME_PROMPT: &str = "Enter the new name for the project";
const GIT_DIR: &str = ".git";

#[derive(Debug, Clone, Default)]
pub struct CloneOptions {
    /// New project name; prompted for when absent.
    pub name: Option<String>,
    pub template_dir: PathBuf,
    /// Parent of the new project. Defaults to the template's parent.
    pub projects_root: Option<PathBuf>,
    /// Skip remote repository creation and push.
    pub local_only: bool,
    /// Overrides the configured visibility.
    pub visibility: Option<Visibility>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOutcome {
    pub name: ProjectName,
    pub target_dir: PathBuf,
    pub token: String,
    pub substitution: SubstitutionReport,
    pub published: bool,
}

pub fn execute<R: CommandRunner>(
    ctx: &AppContext<R>,
    prompt: &impl NamePrompt,
    options: CloneOptions,
) -> Result<CloneOutcome, AppError> {
    let config = ctx.config();
    let name = resolve_name(options.name.as_deref(), config.prompt_if_name_missing, prompt)?;

    let template_dir = fs::canonicalize(&options.template_dir).map_err(|_| {
        AppError::config_error(format!(
            "Template directory not found: {}",
            options.template_dir.display()
        ))
    })?;
    let token = resolve_token(config.token.as_deref(), &template_dir)?;
    let projects_root = match options.projects_root {
        Some(root) => std::path::absolute(root)?,
        None => template_dir
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| AppError::config_error("Template directory has no parent"))?,
    };
    let target_dir = projects_root.join(name.as_str());
    if target_dir.starts_with(&template_dir) {
        return Err(AppError::invalid_input(format!(
            "destination {} lies inside the template directory",
            target_dir.display()
        )));
    }

    info!("Copying: {} to {}", template_dir.display(), target_dir.display());
    project_tree::copy_tree(&template_dir, &target_dir)?;

    info!("Working in: {}", target_dir.display());
    let tools = TargetTools {
        runner: ctx.runner(),
        cwd: &target_dir,
        policy: FailurePolicy::from_strict(config.strict_on_command_failure),
    };

    tools.run("git", &["clean", "-fdx"])?;

    let git_dir = target_dir.join(GIT_DIR);
    info!("Removing .git directory: {}", git_dir.display());
    project_tree::remove_dir_if_present(&git_dir)?;

    for script in &config.bootstrap_scripts {
        let script_path = target_dir.join(script);
        info!("Removing script: {}", script_path.display());
        project_tree::remove_required_file(&script_path)?;
    }

    info!("Replacing '{}' with '{}' in all files", token, name);
    let filter = config.binary_filter();
    let substitution =
        project_tree::substitute_token(&target_dir, &token, name.as_str(), &filter)?;
    info!(
        "Rewrote {} of {} file(s), skipped {} binary file(s)",
        substitution.rewritten.len(),
        substitution.scanned,
        substitution.skipped.len()
    );

    let message = format!("Initial commit for {}", name);
    tools.run("git", &["init"])?;
    tools.run("git", &["add", "."])?;
    tools.run("git", &["commit", "-m", message.as_str()])?;

    let published = if options.local_only {
        info!("Local-only mode enabled, skipping remote repository creation.");
        false
    } else {
        let visibility = options.visibility.unwrap_or(config.visibility);
        tools.run(
            "gh",
            &[
                "repo",
                "create",
                name.as_str(),
                visibility.gh_flag(),
                "--source",
                ".",
                "--remote",
                "origin",
            ],
        )?;
        tools.run("gh", &["repo", "edit", "--add-topic", config.topic.as_str()])?;
        tools.run("git", &["push", "--set-upstream", "origin", "HEAD"])?;
        true
    };

    info!("Script complete!");
    warn!("Take next steps at: {}", config.next_steps_url);

    Ok(CloneOutcome { name, target_dir, token, substitution, published })
}

/// Runs external tools inside the new project directory.
struct TargetTools<'a, R: CommandRunner> {
    runner: &'a R,
    cwd: &'a Path,
    policy: FailurePolicy,
}

impl<R: CommandRunner> TargetTools<'_, R> {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let invocation = Invocation::new(program, args.iter().copied(), self.cwd);
        self.runner.run(&invocation, self.policy)?;
        Ok(())
    }
}

fn resolve_name(
    provided: Option<&str>,
    prompt_if_missing: bool,
    prompt: &impl NamePrompt,
) -> Result<ProjectName, AppError> {
    match provided {
        Some(value) => ProjectName::new(value),
        None if prompt_if_missing => match prompt.ask(NAME_PROMPT)? {
            Some(value) => ProjectName::new(&value),
            None => Err(AppError::invalid_input("project name prompt was cancelled")),
        },
        None => Err(AppError::invalid_input("project name is required")),
    }
}

fn resolve_token(configured: Option<&str>, template_dir: &Path) -> Result<String, AppError> {
    if let Some(token) = configured {
        return Ok(token.to_string());
    }
    template_dir
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Cannot derive substitution token from {}; set `token` in stencil.toml",
                template_dir.display()
            ))
        })
}
