mod command_runner;
mod name_prompt;

pub use command_runner::{CommandOutput, CommandRunner, FailurePolicy, Invocation};
pub use name_prompt::NamePrompt;
