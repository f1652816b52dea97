use dialoguer::{Input, Password};

use crate::domain::AppError;
use crate::ports::InteractivePrompt;

/// Terminal prompt: notices on stderr, answers read with dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl InteractivePrompt for ConsolePrompt {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn ask(&self, prompt: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    fn ask_secret(&self, prompt: &str) -> Result<String, AppError> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| AppError::Validation(e.to_string()))
    }
}
