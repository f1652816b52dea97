use crate::domain::{AppError, RemoteInfo};
use crate::ports::GitRemoteInspector;

pub struct FakeGit {
    pub inside_worktree: bool,
    pub remotes: Vec<RemoteInfo>,
    pub upstream_branch: Result<String, String>,
}

impl FakeGit {
    pub fn outside_worktree() -> Self {
        Self { inside_worktree: false, remotes: Vec::new(), upstream_branch: Ok(String::new()) }
    }

    pub fn with_remotes(remotes: Vec<RemoteInfo>) -> Self {
        Self { inside_worktree: true, remotes, upstream_branch: Ok("main".to_string()) }
    }

    pub fn with_broken_branch(mut self) -> Self {
        self.upstream_branch = Err("HEAD is detached".to_string());
        self
    }
}

impl GitRemoteInspector for FakeGit {
    fn is_inside_worktree(&self) -> Result<bool, AppError> {
        Ok(self.inside_worktree)
    }

    fn list_remotes(&self) -> Result<Vec<RemoteInfo>, AppError> {
        Ok(self.remotes.clone())
    }

    fn current_upstream_branch(&self) -> Result<String, AppError> {
        self.upstream_branch.clone().map_err(AppError::BranchUnavailable)
    }
}
