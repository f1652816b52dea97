use crate::domain::AppError;

/// Port for choosing one entry out of a list.
pub trait ItemPicker {
    /// Index of the chosen item, or `None` when the operator aborts.
    fn pick(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError>;
}
