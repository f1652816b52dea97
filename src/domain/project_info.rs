//! Resolved hosting target and the URLs derived from it.

use super::{AppError, Profile};

const GITHUB_DOMAIN: &str = "github.com";

/// The domain/project/token triple every command acts on.
///
/// Built once per invocation by the target resolver and read-only afterwards.
/// A non-empty `domain` always comes with a non-empty `token`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub domain: String,
    /// `owner/name`, or empty when no project could be inferred.
    pub project: String,
    pub token: String,
    pub current_branch: String,
    pub profile: Option<Profile>,
}

impl ProjectInfo {
    /// `https://<domain>`
    pub fn base_url(&self) -> String {
        format!("https://{}", self.domain.trim_matches('/'))
    }

    /// `<base>/api/v4`
    pub fn api_url(&self) -> String {
        join_url(&self.base_url(), &["api", "v4"])
    }

    /// GraphQL endpoint for the domain.
    ///
    /// `github.com` is served from `api.github.com`; enterprise hosts expose the
    /// endpoint under `/api/graphql` on the instance itself.
    pub fn graphql_url(&self) -> String {
        if self.domain.trim_matches('/') == GITHUB_DOMAIN {
            "https://api.github.com/graphql".to_string()
        } else {
            join_url(&self.base_url(), &["api", "graphql"])
        }
    }

    /// `<base>/<project>`
    pub fn repository_url(&self) -> String {
        join_url(&self.base_url(), &[&self.project])
    }

    /// `<repository>/<subpage>`, e.g. `issues`, `pull` or `releases/tag`.
    pub fn subpage_url(&self, subpage: &str) -> String {
        join_url(&self.repository_url(), &[subpage])
    }

    /// `<repository>/tree/<branch>`
    pub fn branch_url(&self, branch: &str) -> String {
        join_url(&self.repository_url(), &["tree", branch])
    }

    /// `<repository>/tree/<branch>/<path>`
    pub fn branch_path(&self, branch: &str, path: &str) -> String {
        join_url(&self.branch_url(branch), &[path])
    }

    /// `<repository>/tree/<branch>/<path>/<line>`
    pub fn branch_file_with_line(&self, branch: &str, path: &str, line: &str) -> String {
        join_url(&self.branch_path(branch, path), &[line])
    }

    /// Split `project` into owner and repository name.
    pub fn owner_and_name(&self) -> Result<(&str, &str), AppError> {
        split_project(&self.project)
    }
}

/// Split an `owner/name` project path.
pub fn split_project(project: &str) -> Result<(&str, &str), AppError> {
    match project.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(AppError::InvalidProject(project.to_string())),
    }
}

/// Append path segments to a base URL with exactly one `/` between pieces.
///
/// Leading and trailing slashes on every piece are dropped, and pieces that
/// are empty after trimming are skipped.
pub(crate) fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(segment);
    }
    url
}
