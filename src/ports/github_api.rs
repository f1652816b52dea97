use crate::domain::{
    AppError, Issue, IssueListOptions, PullRequest, PullRequestListOptions, Release,
    ReleaseListOptions,
};

/// Port for the hosted repository API.
pub trait GitHubApi {
    fn list_issues(
        &self,
        owner: &str,
        name: &str,
        options: &IssueListOptions,
    ) -> Result<Vec<Issue>, AppError>;

    fn show_issue(&self, owner: &str, name: &str, number: u64) -> Result<Issue, AppError>;

    fn list_pull_requests(
        &self,
        owner: &str,
        name: &str,
        options: &PullRequestListOptions,
    ) -> Result<Vec<PullRequest>, AppError>;

    fn show_pull_request(
        &self,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<PullRequest, AppError>;

    fn list_releases(
        &self,
        owner: &str,
        name: &str,
        options: &ReleaseListOptions,
    ) -> Result<Vec<Release>, AppError>;
}
