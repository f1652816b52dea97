use std::io;

use thiserror::Error;

/// Library-wide error type for huc operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The persisted profile store could not be parsed.
    #[error("Failed to parse config {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// The profile store could not be serialized for saving.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No profile is stored for the requested domain.
    #[error("Profile '{0}' not found in config")]
    ProfileNotFound(String),

    /// Inside a git worktree, but no remote points at a usable host.
    #[error("No matching remote repository found")]
    NoMatchingRemote,

    /// A project was named but no domain could be determined for it.
    #[error(
        "Cannot determine the host for project '{project}': configure a default domain or pass --profile"
    )]
    DomainUnresolved { project: String },

    /// Project string is not of the form `owner/name`.
    #[error("Invalid project '{0}': expected 'owner/name'")]
    InvalidProject(String),

    /// The current branch could not be read.
    #[error("Cannot read current branch: {0}")]
    BranchUnavailable(String),

    /// The operator did not provide a token when one was required.
    #[error("cannot read private token, {0}")]
    TokenUnavailable(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// GitHub API request failed.
    #[error("GitHub API error: {message}")]
    GitHubApiError { message: String, status: Option<u16> },

    /// External tool (browser, pager) failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Invalid user input.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn git(command: impl Into<String>, err: git2::Error) -> Self {
        AppError::GitError { command: command.into(), details: err.message().to_string() }
    }
}
