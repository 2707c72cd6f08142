mod fake_command_runner;
mod fake_prompt;

pub use fake_command_runner::FakeCommandRunner;
pub use fake_prompt::FakePrompt;
