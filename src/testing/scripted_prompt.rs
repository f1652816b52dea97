use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::InteractivePrompt;

/// Prompt that replays canned answers and records everything shown.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    fail: bool,
    questions: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    /// No answers queued; any question is an error.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let answers = answers.into_iter().map(Into::into).collect();
        Self { answers: RefCell::new(answers), ..Self::default() }
    }

    /// Every question fails like a closed terminal.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl InteractivePrompt for ScriptedPrompt {
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn ask(&self, prompt: &str) -> Result<String, AppError> {
        self.questions.borrow_mut().push(prompt.to_string());
        if self.fail {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "not a terminal",
            )));
        }
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Validation(format!("unexpected prompt: {}", prompt)))
    }
}
