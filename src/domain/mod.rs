pub mod error;
pub mod github;
pub mod profile;
pub mod project_info;
pub mod remote;

pub use error::AppError;
pub use github::{
    Actor, GitHubApiConfig, Issue, IssueListOptions, IssueSort, IssueState, OrderDirection,
    PullRequest, PullRequestListOptions, PullRequestState, Release, ReleaseListOptions,
    ReleaseSort,
};
pub use profile::Profile;
pub(crate) use project_info::join_url;
pub use project_info::{ProjectInfo, split_project};
pub use remote::{GitRemoteUrl, RemoteInfo};
