//! Records and list options for the hosted repository API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use super::{AppError, ProjectInfo};

/// Upper-case and underscore a flag value so `created-at` and `CREATED_AT` match.
fn normalize(value: &str) -> String {
    value.trim().replace('-', "_").to_ascii_uppercase()
}

macro_rules! graphql_enum {
    ($(#[$meta:meta])* $name:ident, $what:literal { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// GraphQL enum literal.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match normalize(value).as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(AppError::Validation(format!(
                        "Invalid {} option '{}': expected one of {}",
                        $what,
                        value,
                        [$($wire),+].join(", ")
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

graphql_enum!(
    /// Sort order of a listing.
    OrderDirection, "direction" { Asc => "ASC", Desc => "DESC" }
);

graphql_enum!(
    /// Field issues and pull requests are ordered by.
    IssueSort, "sort" { Comments => "COMMENTS", CreatedAt => "CREATED_AT", UpdatedAt => "UPDATED_AT" }
);

graphql_enum!(
    IssueState, "issue state" { Open => "OPEN", Closed => "CLOSED" }
);

graphql_enum!(
    PullRequestState, "pull request state" { Open => "OPEN", Closed => "CLOSED", Merged => "MERGED" }
);

graphql_enum!(
    /// Field releases are ordered by.
    ReleaseSort, "release sort" { CreatedAt => "CREATED_AT", Name => "NAME" }
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueListOptions {
    pub num: u32,
    pub sort: IssueSort,
    pub direction: OrderDirection,
    pub states: IssueState,
    pub labels: Vec<String>,
}

impl Default for IssueListOptions {
    fn default() -> Self {
        Self {
            num: 50,
            sort: IssueSort::CreatedAt,
            direction: OrderDirection::Desc,
            states: IssueState::Open,
            labels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestListOptions {
    pub num: u32,
    pub sort: IssueSort,
    pub direction: OrderDirection,
    pub states: PullRequestState,
    pub labels: Vec<String>,
}

impl Default for PullRequestListOptions {
    fn default() -> Self {
        Self {
            num: 50,
            sort: IssueSort::CreatedAt,
            direction: OrderDirection::Desc,
            states: PullRequestState::Open,
            labels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseListOptions {
    pub num: u32,
    pub sort: ReleaseSort,
    pub direction: OrderDirection,
}

impl Default for ReleaseListOptions {
    fn default() -> Self {
        Self { num: 50, sort: ReleaseSort::CreatedAt, direction: OrderDirection::Desc }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: Option<Actor>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// One-line label used in the picker.
    pub fn label(&self) -> String {
        format!("{} {}", self.number, self.title)
    }

    pub fn detail(&self) -> String {
        format!(
            "Issue Number: {} ({})\nTitle: {}\n{}\n{}",
            self.number,
            self.id,
            self.title,
            byline(self.author.as_ref(), self.published_at.as_ref()),
            self.body
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub id: String,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: Option<Actor>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn label(&self) -> String {
        format!("{} {}", self.number, self.title)
    }

    pub fn detail(&self) -> String {
        format!(
            "Pull Request Number: {} ({})\nTitle: {}\n{}\n{}",
            self.number,
            self.id,
            self.title,
            byline(self.author.as_ref(), self.published_at.as_ref()),
            self.body
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Release {
    /// Releases without a title fall back to their tag.
    pub fn label(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.tag_name.clone(),
        }
    }

    pub fn detail(&self) -> String {
        format!(
            "{}\nTitle: {}\n\n{}",
            self.id,
            self.tag_name,
            self.description.as_deref().unwrap_or_default()
        )
    }
}

/// Connection settings for the GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubApiConfig {
    pub api_url: Url,
    pub timeout_secs: u64,
}

impl GitHubApiConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Endpoint for the resolved target's domain.
    pub fn for_project(project: &ProjectInfo) -> Result<Self, AppError> {
        let endpoint = project.graphql_url();
        let api_url = Url::parse(&endpoint).map_err(|e| {
            AppError::config_error(format!("Invalid API endpoint '{}': {}", endpoint, e))
        })?;
        Ok(Self { api_url, timeout_secs: Self::DEFAULT_TIMEOUT_SECS })
    }
}

fn byline(author: Option<&Actor>, published_at: Option<&DateTime<Utc>>) -> String {
    let mut line = String::new();
    if let Some(author) = author {
        line.push_str(&format!("Author: {}", author.login));
    }
    if let Some(at) = published_at {
        if !line.is_empty() {
            line.push_str(", ");
        }
        line.push_str(&format!("Published: {}", at.format("%Y-%m-%d %H:%M")));
    }
    line
}
