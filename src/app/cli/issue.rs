use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::app::commands::{ItemAction, ItemOutcome, issue};
use crate::domain::{AppError, IssueListOptions, IssueSort, IssueState, OrderDirection};
use crate::ports::{GitHubApi, ItemPicker, Pager, UrlOpener};

#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct IssueArgs {
    #[command(subcommand)]
    command: Option<IssueCommands>,
    /// Number of issues to list (1-100)
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
    /// Issue state: open, closed
    #[arg(long, default_value = "open")]
    states: IssueState,
    /// Only issues carrying these labels (comma-separated)
    #[arg(long, value_delimiter = ',')]
    labels: Vec<String>,
    /// What to do with the picked issue: browse, show
    #[arg(long, default_value = "browse")]
    action: ItemAction,
}

#[derive(Debug, Subcommand)]
enum IssueCommands {
    /// Open an issue in the browser
    #[clap(visible_alias = "b")]
    Browse { number: u64 },
    /// Print an issue's details
    #[clap(visible_alias = "s")]
    Show { number: u64 },
}

pub fn run<A, K, O, P>(
    ctx: &AppContext<A, K, O, P>,
    args: IssueArgs,
) -> Result<ItemOutcome, AppError>
where
    A: GitHubApi,
    K: ItemPicker,
    O: UrlOpener,
    P: Pager,
{
    match args.command {
        Some(IssueCommands::Browse { number }) => issue::browse(ctx, number),
        Some(IssueCommands::Show { number }) => issue::show(ctx, number),
        None => {
            let options = IssueListOptions {
                num: args.num,
                sort: args.sort,
                direction: args.direction,
                states: args.states,
                labels: args.labels,
            };
            issue::execute(ctx, &options, args.action)
        }
    }
}
