use std::cell::RefCell;

use crate::domain::{
    AppError, Issue, IssueListOptions, PullRequest, PullRequestListOptions, Release,
    ReleaseListOptions,
};
use crate::ports::GitHubApi;

/// Canned API responses plus a log of which repository was queried.
#[derive(Default)]
pub struct FakeGitHub {
    pub issues: Vec<Issue>,
    pub pull_requests: Vec<PullRequest>,
    pub releases: Vec<Release>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeGitHub {
    fn record(&self, what: &str, owner: &str, name: &str) {
        self.requests.borrow_mut().push(format!("{} {}/{}", what, owner, name));
    }

    fn not_found(number: u64) -> AppError {
        AppError::GitHubApiError { message: format!("Could not resolve #{}", number), status: None }
    }
}

impl GitHubApi for FakeGitHub {
    fn list_issues(
        &self,
        owner: &str,
        name: &str,
        options: &IssueListOptions,
    ) -> Result<Vec<Issue>, AppError> {
        self.record("list_issues", owner, name);
        Ok(self.issues.iter().take(options.num as usize).cloned().collect())
    }

    fn show_issue(&self, owner: &str, name: &str, number: u64) -> Result<Issue, AppError> {
        self.record("show_issue", owner, name);
        self.issues
            .iter()
            .find(|i| i.number == number)
            .cloned()
            .ok_or_else(|| Self::not_found(number))
    }

    fn list_pull_requests(
        &self,
        owner: &str,
        name: &str,
        options: &PullRequestListOptions,
    ) -> Result<Vec<PullRequest>, AppError> {
        self.record("list_pull_requests", owner, name);
        Ok(self.pull_requests.iter().take(options.num as usize).cloned().collect())
    }

    fn show_pull_request(
        &self,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<PullRequest, AppError> {
        self.record("show_pull_request", owner, name);
        self.pull_requests
            .iter()
            .find(|p| p.number == number)
            .cloned()
            .ok_or_else(|| Self::not_found(number))
    }

    fn list_releases(
        &self,
        owner: &str,
        name: &str,
        options: &ReleaseListOptions,
    ) -> Result<Vec<Release>, AppError> {
        self.record("list_releases", owner, name);
        Ok(self.releases.iter().take(options.num as usize).cloned().collect())
    }
}
