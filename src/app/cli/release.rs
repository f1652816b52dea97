use clap::Args;

use crate::app::AppContext;
use crate::app::commands::{ItemAction, ItemOutcome, release};
use crate::domain::{AppError, OrderDirection, ReleaseListOptions, ReleaseSort};
use crate::ports::{GitHubApi, ItemPicker, Pager, UrlOpener};

#[derive(Debug, Args)]
pub struct ReleaseArgs {
    /// Number of releases to list (1-100)
    #[arg(
        short = 'n',
        long,
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    num: u32,
    /// Order by: created-at, name
    #[arg(long, default_value = "created-at")]
    sort: ReleaseSort,
    /// Sort direction: asc, desc
    #[arg(long, default_value = "desc")]
    direction: OrderDirection,
    /// What to do with the picked release: browse, show
    #[arg(long, default_value = "browse")]
    action: ItemAction,
}

pub fn run<A, K, O, P>(
    ctx: &AppContext<A, K, O, P>,
    args: ReleaseArgs,
) -> Result<ItemOutcome, AppError>
where
    A: GitHubApi,
    K: ItemPicker,
    O: UrlOpener,
    P: Pager,
{
    let options = ReleaseListOptions { num: args.num, sort: args.sort, direction: args.direction };
    release::execute(ctx, &options, args.action)
}
