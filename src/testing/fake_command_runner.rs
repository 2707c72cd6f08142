use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner, FailurePolicy, Invocation};

/// Records invocations instead of spawning processes.
#[derive(Default)]
pub struct FakeCommandRunner {
    pub invocations: RefCell<Vec<Invocation>>,
    failures: RefCell<Vec<(String, String, i32)>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program <first_arg> ...` exit with `status`.
    pub fn fail_on(self, program: &str, first_arg: &str, status: i32) -> Self {
        self.failures.borrow_mut().push((program.to_string(), first_arg.to_string(), status));
        self
    }

    /// Recorded command lines as `program arg arg`.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|inv| {
                std::iter::once(inv.program.clone())
                    .chain(inv.args.iter().cloned())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    fn status_for(&self, invocation: &Invocation) -> i32 {
        let first = invocation.args.first().map(String::as_str).unwrap_or("");
        self.failures
            .borrow()
            .iter()
            .find(|(program, arg, _)| program == &invocation.program && arg == first)
            .map(|(_, _, status)| *status)
            .unwrap_or(0)
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(
        &self,
        invocation: &Invocation,
        policy: FailurePolicy,
    ) -> Result<CommandOutput, AppError> {
        self.invocations.borrow_mut().push(invocation.clone());
        let status = self.status_for(invocation);
        if status != 0 && policy == FailurePolicy::Strict {
            return Err(AppError::ExternalCommandFailure { command: invocation.display(), status });
        }
        Ok(CommandOutput { status, ..CommandOutput::default() })
    }
}
