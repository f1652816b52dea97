use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::app::commands::{ItemAction, ItemOutcome, pull_request};
use crate::domain::{AppError, IssueSort, OrderDirection, PullRequestListOptions, PullRequestState};
use crate::ports::{GitHubApi, ItemPicker, Pager, UrlOpener};

#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct PullRequestArgs {
    #[command(subcommand)]
    command: Option<PullRequestCommands>,
    /// Number of pull requests to list (1-100)
    #[arg(
        short = 'n',
        long,
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    num: u32,
    /// Order by: comments, created-at, updated-at
    #[arg(long, default_value = "created-at")]
    sort: IssueSort,
    /// Sort direction: asc, desc
    #[arg(long, default_value = "desc")]
    direction: OrderDirection,
    /// Pull request state: open, closed, merged
    #[arg(long, default_value = "open")]
    states: PullRequestState,
    /// Only pull requests carrying these labels (comma-separated)
    #[arg(long, value_delimiter = ',')]
    labels: Vec<String>,
    /// What to do with the picked pull request: browse, show
    #[arg(long, default_value = "browse")]
    action: ItemAction,
}

#[derive(Debug, Subcommand)]
enum PullRequestCommands {
    /// Open a pull request in the browser
    #[clap(visible_alias = "b")]
    Browse { number: u64 },
    /// Print a pull request's details
    #[clap(visible_alias = "s")]
    Show { number: u64 },
}

pub fn run<A, K, O, P>(
    ctx: &AppContext<A, K, O, P>,
    args: PullRequestArgs,
) -> Result<ItemOutcome, AppError>
where
    A: GitHubApi,
    K: ItemPicker,
    O: UrlOpener,
    P: Pager,
{
    match args.command {
        Some(PullRequestCommands::Browse { number }) => pull_request::browse(ctx, number),
        Some(PullRequestCommands::Show { number }) => pull_request::show(ctx, number),
        None => {
            let options = PullRequestListOptions {
                num: args.num,
                sort: args.sort,
                direction: args.direction,
                states: args.states,
                labels: args.labels,
            };
            pull_request::execute(ctx, &options, args.action)
        }
    }
}
