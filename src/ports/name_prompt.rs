use crate::domain::AppError;

/// Port for asking the operator for a value interactively.
pub trait NamePrompt {
    /// Returns `None` when the operator cancels the prompt.
    fn ask(&self, message: &str) -> Result<Option<String>, AppError>;
}
