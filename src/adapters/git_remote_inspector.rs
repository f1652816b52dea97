use std::path::PathBuf;

use git2::{ErrorCode, Repository};
use log::debug;

use crate::domain::{AppError, RemoteInfo};
use crate::ports::GitRemoteInspector;

/// Reads remotes and branch tracking from the repository containing `root`.
#[derive(Debug, Clone)]
pub struct Git2RemoteInspector {
    root: PathBuf,
}

impl Git2RemoteInspector {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Inspector for the process working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(|e| AppError::git("git2::Repository::discover", e))
    }

    fn unborn_branch_name(repo: &Repository) -> Result<String, AppError> {
        let head_ref = repo
            .find_reference("HEAD")
            .map_err(|e| AppError::git("git2::Repository::find_reference(HEAD)", e))?;
        head_ref
            .symbolic_target()
            .map(|target| target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
            .ok_or_else(|| AppError::BranchUnavailable("HEAD is detached and unborn".into()))
    }
}

impl GitRemoteInspector for Git2RemoteInspector {
    fn is_inside_worktree(&self) -> Result<bool, AppError> {
        match Repository::discover(&self.root) {
            Ok(repo) => Ok(!repo.is_bare()),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(AppError::git("git2::Repository::discover", e)),
        }
    }

    fn list_remotes(&self) -> Result<Vec<RemoteInfo>, AppError> {
        let repo = self.repo()?;
        let names = repo.remotes().map_err(|e| AppError::git("git2::Repository::remotes", e))?;

        let mut remotes = Vec::new();
        for name in names.iter().flatten() {
            let remote =
                repo.find_remote(name).map_err(|e| AppError::git("git2::Repository::find_remote", e))?;
            let Some(url) = remote.url() else {
                debug!("skipping remote '{}': url is not valid utf-8", name);
                continue;
            };
            match RemoteInfo::from_url(name, url) {
                Some(info) => remotes.push(info),
                None => debug!("skipping remote '{}': unsupported url {}", name, url),
            }
        }
        Ok(remotes)
    }

    fn current_upstream_branch(&self) -> Result<String, AppError> {
        let repo = self.repo()?;
        let head = match repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                return Self::unborn_branch_name(&repo);
            }
            Err(e) => return Err(AppError::BranchUnavailable(e.message().to_string())),
        };
        if !head.is_branch() {
            return Err(AppError::BranchUnavailable("HEAD is detached".into()));
        }

        let refname = head
            .name()
            .ok_or_else(|| AppError::BranchUnavailable("branch name is not valid utf-8".into()))?;
        let local = head.shorthand().unwrap_or(refname).to_string();

        let upstream = match repo.branch_upstream_name(refname) {
            Ok(buf) => buf.as_str().map(str::to_string),
            Err(e) if e.code() == ErrorCode::NotFound => None,
            Err(e) => return Err(AppError::git("git2::Repository::branch_upstream_name", e)),
        };
        let Some(upstream) = upstream else {
            debug!("branch '{}' has no upstream, using local name", local);
            return Ok(local);
        };

        let remote = repo
            .branch_upstream_remote(refname)
            .ok()
            .and_then(|buf| buf.as_str().map(str::to_string));
        let branch = match remote {
            Some(remote) => upstream
                .strip_prefix(&format!("refs/remotes/{}/", remote))
                .map(str::to_string),
            None => None,
        };
        // an upstream in the local repository is `refs/heads/<name>`
        Ok(branch
            .or_else(|| upstream.strip_prefix("refs/heads/").map(str::to_string))
            .unwrap_or(local))
    }
}
