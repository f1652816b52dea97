//! `huc pull-request`: list, browse and show pull requests.

use log::debug;

use super::{ItemAction, ItemOutcome, item_url, repository};
use crate::app::AppContext;
use crate::domain::{AppError, PullRequest, PullRequestListOptions};
use crate::ports::{GitHubApi, ItemPicker, Pager, UrlOpener};

const SUBPAGE: &str = "pull";

pub fn execute<A, K, O, P>(
    ctx: &AppContext<A, K, O, P>,
    options: &PullRequestListOptions,
    action: ItemAction,
) -> Result<ItemOutcome, AppError>
where
    A: GitHubApi,
    K: ItemPicker,
    O: UrlOpener,
    P: Pager,
{
    let (owner, name) = repository(ctx.target())?;
    let pulls = ctx.api().list_pull_requests(owner, name, options)?;
    debug!("listed {} pull requests of {}/{}", pulls.len(), owner, name);
    if pulls.is_empty() {
        return Ok(ItemOutcome::NothingFound);
    }

    let labels: Vec<String> = pulls.iter().map(PullRequest::label).collect();
    let Some(pull) = ctx.picker().pick("Pull request", &labels)?.and_then(|i| pulls.get(i))
    else {
        return Ok(ItemOutcome::Cancelled);
    };

    match action {
        ItemAction::Browse => browse(ctx, pull.number),
        ItemAction::Show => {
            ctx.pager().show(&pull.detail())?;
            Ok(ItemOutcome::Shown)
        }
    }
}

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
    let pull = ctx.api().show_pull_request(owner, name, number)?;
    ctx.pager().show(&pull.detail())?;
    Ok(ItemOutcome::Shown)
}
