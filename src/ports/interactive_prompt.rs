use crate::domain::AppError;

/// Port for talking to the operator.
pub trait InteractivePrompt {
    /// Show a notice line.
    fn notify(&self, message: &str);

    /// Ask a free-text question.
    fn ask(&self, prompt: &str) -> Result<String, AppError>;

    /// Ask for a value that should not be echoed.
    fn ask_secret(&self, prompt: &str) -> Result<String, AppError> {
        self.ask(prompt)
    }
}
