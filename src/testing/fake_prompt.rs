use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::NamePrompt;

/// Prompt that replays a canned answer and counts how often it was asked.
#[derive(Default)]
pub struct FakePrompt {
    answer: Option<String>,
    pub asked: RefCell<usize>,
}

impl FakePrompt {
    pub fn answering(answer: &str) -> Self {
        Self { answer: Some(answer.to_string()), asked: RefCell::new(0) }
    }

    pub fn cancelled() -> Self {
        Self::default()
    }
}

impl NamePrompt for FakePrompt {
    fn ask(&self, _message: &str) -> Result<Option<String>, AppError> {
        *self.asked.borrow_mut() += 1;
        Ok(self.answer.clone())
    }
}
