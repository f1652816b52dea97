use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{ItemPicker, Pager, UrlOpener};

/// Picker that always returns the same choice and remembers what it offered.
pub struct FixedPicker {
    choice: Option<usize>,
    pub offered: RefCell<Vec<String>>,
}

impl FixedPicker {
    pub fn choosing(index: usize) -> Self {
        Self { choice: Some(index), offered: RefCell::new(Vec::new()) }
    }

    pub fn aborting() -> Self {
        Self { choice: None, offered: RefCell::new(Vec::new()) }
    }
}

impl ItemPicker for FixedPicker {
    fn pick(&self, _prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        *self.offered.borrow_mut() = items.to_vec();
        Ok(self.choice.filter(|i| *i < items.len()))
    }
}

#[derive(Default)]
pub struct RecordingBrowser {
    pub opened: RefCell<Vec<String>>,
}

impl UrlOpener for RecordingBrowser {
    fn open(&self, url: &str) -> Result<(), AppError> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingPager {
    pub shown: RefCell<Vec<String>>,
}

impl Pager for RecordingPager {
    fn show(&self, contents: &str) -> Result<(), AppError> {
        self.shown.borrow_mut().push(contents.to_string());
        Ok(())
    }
}
