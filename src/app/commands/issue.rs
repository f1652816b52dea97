//! `huc issue`: list, browse and show issues.

use log::debug;

use super::{ItemAction, ItemOutcome, item_url, repository};
use crate::app::AppContext;
use crate::domain::{AppError, Issue, IssueListOptions};
use crate::ports::{GitHubApi, ItemPicker, Pager, UrlOpener};

const SUBPAGE: &str = "issues";

/// List issues, let the operator pick one, then act on it.
pub fn execute<A, K, O, P>(
    ctx: &AppContext<A, K, O, P>,
    options: &IssueListOptions,
    action: ItemAction,
) -> Result<ItemOutcome, AppError>
where
    A: GitHubApi,
    K: ItemPicker,
    O: UrlOpener,
    P: Pager,
{
    let (owner, name) = repository(ctx.target())?;
    let issues = ctx.api().list_issues(owner, name, options)?;
    debug!("listed {} issues of {}/{}", issues.len(), owner, name);
    if issues.is_empty() {
        return Ok(ItemOutcome::NothingFound);
    }

    let labels: Vec<String> = issues.iter().map(Issue::label).collect();
    let Some(issue) = ctx.picker().pick("Issue", &labels)?.and_then(|i| issues.get(i)) else {
        return Ok(ItemOutcome::Cancelled);
    };

    match action {
        ItemAction::Browse => browse(ctx, issue.number),
        ItemAction::Show => {
            ctx.pager().show(&issue.detail())?;
            Ok(ItemOutcome::Shown)
        }
    }
}

/// Open issue `number` in the browser.
pub fn browse<A, K, O, P>(
    ctx: &AppContext<A, K, O, P>,
    number: u64,
) -> Result<ItemOutcome, AppError>
where
    A: GitHubApi,
    K: ItemPicker,
    O: UrlOpener,
    P: Pager,
{
    repository(ctx.target())?;
    let url = item_url(ctx.target(), SUBPAGE, &number.to_string());
    ctx.opener().open(&url)?;
    Ok(ItemOutcome::Opened(url))
}

/// Fetch issue `number` and page its detail text.
pub fn show<A, K, O, P>(
    ctx: &AppContext<A, K, O, P>,
    number: u64,
) -> Result<ItemOutcome, AppError>
where
    A: GitHubApi,
    K: ItemPicker,
    O: UrlOpener,
    P: Pager,
{
    let (owner, name) = repository(ctx.target())?;
    let issue = ctx.api().show_issue(owner, name, number)?;
    ctx.pager().show(&issue.detail())?;
    Ok(ItemOutcome::Shown)
}
