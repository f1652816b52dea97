use crate::domain::AppError;

/// Port for displaying long text.
pub trait Pager {
    fn show(&self, contents: &str) -> Result<(), AppError>;
}
