use dialoguer::FuzzySelect;

use crate::domain::AppError;
use crate::ports::ItemPicker;

#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyPicker;

impl ItemPicker for FuzzyPicker {
    fn pick(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        if items.is_empty() {
            return Ok(None);
        }
        FuzzySelect::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| AppError::Validation(format!("Failed to read selection: {}", e)))
    }
}
