use std::path::Path;

fn git(repo_dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

pub(crate) fn init_repo(repo_dir: &Path) {
    git(repo_dir, &["init", "--initial-branch=main"]);
    configure_user(repo_dir);
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
}

pub(crate) fn add_remote(repo_dir: &Path, name: &str, url: &str) {
    git(repo_dir, &["remote", "add", name, url]);
}

pub(crate) fn commit_empty(repo_dir: &Path, message: &str) {
    git(repo_dir, &["commit", "--allow-empty", "-m", message]);
}

pub(crate) fn checkout_new_branch(repo_dir: &Path, branch: &str) {
    git(repo_dir, &["checkout", "-b", branch]);
}

/// Point `branch` at `<remote>/<remote_branch>` without fetching.
pub(crate) fn set_upstream(repo_dir: &Path, branch: &str, remote: &str, remote_branch: &str) {
    git(repo_dir, &["config", &format!("branch.{}.remote", branch), remote]);
    git(
        repo_dir,
        &["config", &format!("branch.{}.merge", branch), &format!("refs/heads/{}", remote_branch)],
    );
}
