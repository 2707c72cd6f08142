use std::process::{Command, ExitStatus};

use tracing::{debug, error, info};

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner, FailurePolicy, Invocation};

/// Runs external programs as child processes and logs their output.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(
        &self,
        invocation: &Invocation,
        policy: FailurePolicy,
    ) -> Result<CommandOutput, AppError> {
        let command_line = invocation.display();
        info!("Running command: {}", command_line);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .output()
            .map_err(|e| AppError::CommandSpawn {
                command: command_line.clone(),
                details: e.to_string(),
            })?;

        let result = CommandOutput {
            status: exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        let failed = !result.success();
        if failed {
            error!("Command failed with return code: {}", result.status);
        }
        log_stream(failed, "stdout", &result.stdout);
        log_stream(failed, "stderr", &result.stderr);

        if failed && policy == FailurePolicy::Strict {
            return Err(AppError::ExternalCommandFailure {
                command: command_line,
                status: result.status,
            });
        }

        Ok(result)
    }
}

fn log_stream(failed: bool, name: &str, content: &str) {
    match (failed, content.is_empty()) {
        (true, true) => error!("no {}", name),
        (true, false) => error!("{}:\n{}", name, content),
        (false, true) => debug!("no {}", name),
        (false, false) => debug!("{}:\n{}", name, content),
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status.code().or_else(|| status.signal().map(|signal| 128 + signal)).unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
