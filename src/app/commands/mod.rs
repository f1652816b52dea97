//! Command implementations: list, pick, then browse or page one item.

pub mod issue;
pub mod pull_request;
pub mod release;

use std::fmt;
use std::str::FromStr;

use crate::domain::{AppError, ProjectInfo};

/// What to do with the item picked from a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemAction {
    /// Open the item's page in the browser.
    #[default]
    Browse,
    /// Print the item's detail text through the pager.
    Show,
}

impl FromStr for ItemAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "browse" => Ok(ItemAction::Browse),
            "show" => Ok(ItemAction::Show),
            _ => Err(AppError::Validation(format!(
                "Invalid action '{}': expected one of browse, show",
                value
            ))),
        }
    }
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemAction::Browse => f.write_str("browse"),
            ItemAction::Show => f.write_str("show"),
        }
    }
}

/// Result of a command, reported back to the CLI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The URL handed to the browser.
    Opened(String),
    /// Detail text went to the pager.
    Shown,
    /// The operator dismissed the picker.
    Cancelled,
    /// The listing came back empty.
    NothingFound,
}

/// Owner and name of the target repository, or an error telling the
/// operator how to name one.
pub(crate) fn repository(target: &ProjectInfo) -> Result<(&str, &str), AppError> {
    if target.project.is_empty() {
        return Err(AppError::config_error(
            "No repository selected: run inside a git checkout or pass --project owner/name",
        ));
    }
    target.owner_and_name()
}

/// `<repository>/<subpage>/<leaf>`
pub(crate) fn item_url(target: &ProjectInfo, subpage: &str, leaf: &str) -> String {
    crate::domain::join_url(&target.subpage_url(subpage), &[leaf])
}
