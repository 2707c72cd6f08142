use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for stencil operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A required user-supplied value is missing or malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The clone destination is already present.
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// A file that must exist (bootstrapping script, diff source) is absent.
    #[error("Expected file is missing: {}", .0.display())]
    MissingExpectedFile(PathBuf),

    /// Sibling project has no counterpart of the diffed file.
    #[error("Target file {} does not exist.", .0.display())]
    FileNotFoundInTarget(PathBuf),

    /// A file outside the binary exclusion set could not be read as text.
    #[error("File is not valid UTF-8 text: {} (list its extension in binary_extensions)",
        .0.display())]
    NonTextFile(PathBuf),

    /// External program could not be started.
    #[error("Failed to execute '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// External program exited with a nonzero status.
    #[error("Command '{command}' failed with return code {status}")]
    ExternalCommandFailure { command: String, status: i32 },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        AppError::InvalidInput(message.into())
    }

    /// Process exit status for this error.
    ///
    /// External command failures propagate the child's own status so that
    /// callers scripting around `stencil` observe the same code.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ExternalCommandFailure { status, .. } if *status != 0 => *status,
            _ => 1,
        }
    }
}
