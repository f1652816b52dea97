//! GitHub GraphQL API client using reqwest.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use url::Url;

use crate::domain::{
    AppError, GitHubApiConfig, Issue, IssueListOptions, PullRequest, PullRequestListOptions,
    Release, ReleaseListOptions,
};
use crate::ports::GitHubApi;

const USER_AGENT: &str = concat!("huc/", env!("CARGO_PKG_VERSION"));

const ISSUE_FIELDS: &str = "id number title body publishedAt author { login }";

const LIST_ISSUES: &str = r#"
query($owner: String!, $name: String!, $first: Int!, $states: [IssueState!], $orderBy: IssueOrder, $labels: [String!]) {
  repository(owner: $owner, name: $name) {
    issues(first: $first, states: $states, orderBy: $orderBy, labels: $labels) {
      nodes { FIELDS }
    }
  }
}"#;

const SHOW_ISSUE: &str = r#"
query($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    issue(number: $number) { FIELDS }
  }
}"#;

const LIST_PULL_REQUESTS: &str = r#"
query($owner: String!, $name: String!, $first: Int!, $states: [PullRequestState!], $orderBy: IssueOrder, $labels: [String!]) {
  repository(owner: $owner, name: $name) {
    pullRequests(first: $first, states: $states, orderBy: $orderBy, labels: $labels) {
      nodes { FIELDS }
    }
  }
}"#;

const SHOW_PULL_REQUEST: &str = r#"
query($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    pullRequest(number: $number) { FIELDS }
  }
}"#;

const LIST_RELEASES: &str = r#"
query($owner: String!, $name: String!, $first: Int!, $orderBy: ReleaseOrder) {
  repository(owner: $owner, name: $name) {
    releases(first: $first, orderBy: $orderBy) {
      nodes { id name tagName description }
    }
  }
}"#;

/// HTTP transport for the GitHub GraphQL endpoint.
#[derive(Clone)]
pub struct GraphQlClient {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for GraphQlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQlClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<RepositoryData<T>>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryData<T> {
    repository: Option<T>,
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct IssuesRepository {
    issues: Connection<Issue>,
}

#[derive(Debug, Deserialize)]
struct IssueRepository {
    issue: Option<Issue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestsRepository {
    pull_requests: Connection<PullRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestRepository {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct ReleasesRepository {
    releases: Connection<Release>,
}

impl GraphQlClient {
    pub fn new(token: String, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::GitHubApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { token, api_url: config.api_url.clone(), client })
    }

    /// Run `query` and return the `repository` object of the response.
    fn query_repository<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, AppError> {
        debug!("POST {} variables={}", self.api_url, variables);
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.token)
            .json(&json!({ "query": query.replace("FIELDS", ISSUE_FIELDS), "variables": variables }))
            .send()
            .map_err(|e| AppError::GitHubApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().map_err(|e| AppError::GitHubApiError {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;
        if !status.is_success() {
            let message = extract_error_message(&body_text)
                .unwrap_or_else(|| format!("request failed with status {}", status));
            return Err(AppError::GitHubApiError { message, status: Some(status.as_u16()) });
        }

        let parsed: GraphQlResponse<T> =
            serde_json::from_str(&body_text).map_err(|e| AppError::GitHubApiError {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        if !parsed.errors.is_empty() {
            let message =
                parsed.errors.into_iter().map(|e| e.message).collect::<Vec<_>>().join("; ");
            return Err(AppError::GitHubApiError { message, status: Some(status.as_u16()) });
        }

        parsed.data.and_then(|d| d.repository).ok_or_else(|| AppError::GitHubApiError {
            message: "Repository not found in response".into(),
            status: Some(status.as_u16()),
        })
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn labels_variable(labels: &[String]) -> Value {
    if labels.is_empty() { Value::Null } else { json!(labels) }
}

impl GitHubApi for GraphQlClient {
    fn list_issues(
        &self,
        owner: &str,
        name: &str,
        options: &IssueListOptions,
    ) -> Result<Vec<Issue>, AppError> {
        let repository: IssuesRepository = self.query_repository(
            LIST_ISSUES,
            json!({
                "owner": owner,
                "name": name,
                "first": options.num,
                "states": [options.states.as_str()],
                "orderBy": { "field": options.sort.as_str(), "direction": options.direction.as_str() },
                "labels": labels_variable(&options.labels),
            }),
        )?;
        Ok(repository.issues.nodes)
    }

    fn show_issue(&self, owner: &str, name: &str, number: u64) -> Result<Issue, AppError> {
        let repository: IssueRepository = self.query_repository(
            SHOW_ISSUE,
            json!({ "owner": owner, "name": name, "number": number }),
        )?;
        repository.issue.ok_or_else(|| AppError::GitHubApiError {
            message: format!("Issue #{} not found in {}/{}", number, owner, name),
            status: None,
        })
    }

    fn list_pull_requests(
        &self,
        owner: &str,
        name: &str,
        options: &PullRequestListOptions,
    ) -> Result<Vec<PullRequest>, AppError> {
        let repository: PullRequestsRepository = self.query_repository(
            LIST_PULL_REQUESTS,
            json!({
                "owner": owner,
                "name": name,
                "first": options.num,
                "states": [options.states.as_str()],
                "orderBy": { "field": options.sort.as_str(), "direction": options.direction.as_str() },
                "labels": labels_variable(&options.labels),
            }),
        )?;
        Ok(repository.pull_requests.nodes)
    }

    fn show_pull_request(
        &self,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<PullRequest, AppError> {
        let repository: PullRequestRepository = self.query_repository(
            SHOW_PULL_REQUEST,
            json!({ "owner": owner, "name": name, "number": number }),
        )?;
        repository.pull_request.ok_or_else(|| AppError::GitHubApiError {
            message: format!("Pull request #{} not found in {}/{}", number, owner, name),
            status: None,
        })
    }

    fn list_releases(
        &self,
        owner: &str,
        name: &str,
        options: &ReleaseListOptions,
    ) -> Result<Vec<Release>, AppError> {
        let repository: ReleasesRepository = self.query_repository(
            LIST_RELEASES,
            json!({
                "owner": owner,
                "name": name,
                "first": options.num,
                "orderBy": { "field": options.sort.as_str(), "direction": options.direction.as_str() },
            }),
        )?;
        Ok(repository.releases.nodes)
    }
}
