use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::NamePrompt;

/// Name prompt on standard input.
///
/// Uses dialoguer on a terminal. Piped input is read one line at a time, and
/// end of input counts as a cancelled prompt.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }

    fn ask_terminal(message: &str) -> Result<Option<String>, AppError> {
        match Input::<String>::new().with_prompt(message).allow_empty(true).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => {
                Err(AppError::invalid_input(format!("Failed to read project name: {}", err)))
            }
        }
    }

    fn ask_piped(message: &str) -> Result<Option<String>, AppError> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{}: ", message)?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl NamePrompt for DialoguerPrompt {
    fn ask(&self, message: &str) -> Result<Option<String>, AppError> {
        if io::stdin().is_terminal() {
            Self::ask_terminal(message)
        } else {
            Self::ask_piped(message)
        }
    }
}
