use crate::domain::AppError;

/// Port for opening a URL in the operator's browser.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), AppError>;
}
