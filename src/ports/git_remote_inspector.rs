use crate::domain::{AppError, RemoteInfo};

/// Port for reading the local git checkout.
pub trait GitRemoteInspector {
    /// Whether the working directory is inside a non-bare git worktree.
    fn is_inside_worktree(&self) -> Result<bool, AppError>;

    /// Remotes that point at a hosted `owner/repo`.
    fn list_remotes(&self) -> Result<Vec<RemoteInfo>, AppError>;

    /// Branch name the current branch tracks on its remote.
    fn current_upstream_branch(&self) -> Result<String, AppError>;
}
