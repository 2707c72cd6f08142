use std::fmt;

use crate::domain::AppError;

/// Validated name of a project created from the template.
///
/// The name doubles as the destination directory name and the replacement text
/// for the substitution token, so it must be a single non-empty path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("project name must not be empty"));
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(AppError::invalid_input(format!(
                "project name '{}' must be a single directory name",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
