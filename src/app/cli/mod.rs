//! CLI Adapter.

mod issue;
mod pull_request;
mod release;

use clap::{Parser, Subcommand};
use log::debug;

use crate::adapters::{
    ConsolePrompt, FuzzyPicker, Git2RemoteInspector, GraphQlClient, SystemBrowser, TerminalPager,
    TomlConfigStore,
};
use crate::app::AppContext;
use crate::app::commands::{ItemOutcome, repository};
use crate::domain::{AppError, GitHubApiConfig, ProjectInfo};
use crate::services::TargetResolver;

/// Environment variable holding the `env_logger` filter.
const LOG_ENV: &str = "HUC_LOG";

#[derive(Debug, Parser)]
#[command(name = "huc")]
#[command(version)]
#[command(
    about = "Browse issues, pull requests and releases of the current checkout's repository",
    long_about = None
)]
struct Cli {
    /// Repository to act on (owner/name); overrides the one inferred from git
    #[arg(long, global = true)]
    project: Option<String>,
    /// Configured domain whose profile supplies host and token
    #[arg(long, global = true)]
    profile: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List issues and open or show the one picked
    #[clap(visible_alias = "i")]
    Issue(issue::IssueArgs),
    /// List pull requests and open or show the one picked
    #[clap(visible_alias = "pr")]
    PullRequest(pull_request::PullRequestArgs),
    /// List releases and open or show the one picked
    #[clap(visible_alias = "r")]
    Release(release::ReleaseArgs),
}

type CliContext = AppContext<GraphQlClient, FuzzyPicker, SystemBrowser, TerminalPager>;

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let target = resolve_target(cli.project.as_deref(), cli.profile.as_deref())?;
    let ctx = create_context(target)?;

    let (outcome, noun) = match cli.command {
        Commands::Issue(args) => (issue::run(&ctx, args)?, "issues"),
        Commands::PullRequest(args) => (pull_request::run(&ctx, args)?, "pull requests"),
        Commands::Release(args) => (release::run(&ctx, args)?, "releases"),
    };
    report(&outcome, noun);
    Ok(())
}

fn resolve_target(project: Option<&str>, profile: Option<&str>) -> Result<ProjectInfo, AppError> {
    let mut store = TomlConfigStore::load_default()?;
    let git = Git2RemoteInspector::current()?;
    let prompt = ConsolePrompt;
    TargetResolver::new(&mut store, &git, &prompt).collect_target(project, profile)
}

fn create_context(target: ProjectInfo) -> Result<CliContext, AppError> {
    // every subcommand needs a repository; fail before building a client for nothing
    repository(&target)?;
    let config = GitHubApiConfig::for_project(&target)?;
    let client = GraphQlClient::new(target.token.clone(), &config)?;
    Ok(AppContext::new(target, client, FuzzyPicker, SystemBrowser, TerminalPager))
}

fn report(outcome: &ItemOutcome, noun: &str) {
    match outcome {
        ItemOutcome::Opened(url) => debug!("opened {}", url),
        ItemOutcome::NothingFound => println!("No {} found.", noun),
        ItemOutcome::Shown | ItemOutcome::Cancelled => {}
    }
}
