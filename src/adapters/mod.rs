pub mod dialoguer_prompt;
pub mod process_command_runner;
pub mod project_tree;

pub use dialoguer_prompt::DialoguerPrompt;
pub use process_command_runner::ProcessCommandRunner;
pub use project_tree::SubstitutionReport;
