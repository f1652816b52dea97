//! `huc release`: list releases and open or show one.

use log::debug;

use super::{ItemAction, ItemOutcome, item_url, repository};
use crate::app::AppContext;
use crate::domain::{AppError, Release, ReleaseListOptions};
use crate::ports::{GitHubApi, ItemPicker, Pager, UrlOpener};

const SUBPAGE: &str = "releases/tag";

pub fn execute<A, K, O, P>(
    ctx: &AppContext<A, K, O, P>,
    options: &ReleaseListOptions,
    action: ItemAction,
) -> Result<ItemOutcome, AppError>
where
    A: GitHubApi,
    K: ItemPicker,
    O: UrlOpener,
    P: Pager,
{
    let (owner, name) = repository(ctx.target())?;
    let releases = ctx.api().list_releases(owner, name, options)?;
    debug!("listed {} releases of {}/{}", releases.len(), owner, name);
    if releases.is_empty() {
        return Ok(ItemOutcome::NothingFound);
    }

    let labels: Vec<String> = releases.iter().map(Release::label).collect();
    let Some(release) = ctx.picker().pick("Release", &labels)?.and_then(|i| releases.get(i))
    else {
        return Ok(ItemOutcome::Cancelled);
    };

    match action {
        ItemAction::Browse => {
            let url = item_url(ctx.target(), SUBPAGE, &release.tag_name);
            ctx.opener().open(&url)?;
            Ok(ItemOutcome::Opened(url))
        }
        ItemAction::Show => {
            ctx.pager().show(&release.detail())?;
            Ok(ItemOutcome::Shown)
        }
    }
}
