use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// What to do when an external command exits with a nonzero status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Turn the failure into `AppError::ExternalCommandFailure`.
    #[default]
    Strict,
    /// Log the failure and hand the output back to the caller.
    Lenient,
}

impl FailurePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { FailurePolicy::Strict } else { FailurePolicy::Lenient }
    }
}

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Shell-quoted command line, suitable for logs and error messages.
    pub fn display(&self) -> String {
        let words =
            std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        match shlex::try_join(words.clone()) {
            Ok(joined) => joined,
            Err(_) => words.collect::<Vec<_>>().join(" "),
        }
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Port for running external tools (git, gh, diff viewers).
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation, policy: FailurePolicy)
    -> Result<CommandOutput, AppError>;
}
