use crate::harness::{TestContext, git_repository};
use huc::adapters::Git2RemoteInspector;
use huc::domain::RemoteInfo;
use huc::ports::GitRemoteInspector;

#[test]
fn git_remote_inspector_contract() {
    let ctx = TestContext::new();
    let root = ctx.work_dir();
    let git = Git2RemoteInspector::new(root.to_path_buf());

    // 1. Fresh repository: inside a worktree, unborn branch still has a name
    assert!(git.is_inside_worktree().unwrap());
    assert_eq!(git.current_upstream_branch().unwrap(), "main");
    assert!(git.list_remotes().unwrap().is_empty());

    // 2. Remotes in every supported URL form; unsupported ones are skipped
    ctx.add_remote("origin", "git@github.com:acme/widgets.git");
    ctx.add_remote("upstream", "https://github.com/upstream-org/widgets");
    ctx.add_remote("mirror", "ssh://git@ghe.example.com/team/widgets.git");
    ctx.add_remote("managed", "org-123@github.com:acme/widgets-fork.git");
    ctx.add_remote("local", "/srv/git/widgets.git");

    let mut remotes = git.list_remotes().unwrap();
    remotes.sort_by(|a, b| a.remote_name.cmp(&b.remote_name));
    assert_eq!(
        remotes,
        vec![
            RemoteInfo::new("managed", "github.com", "acme/widgets-fork"),
            RemoteInfo::new("mirror", "ghe.example.com", "team/widgets"),
            RemoteInfo::new("origin", "github.com", "acme/widgets"),
            RemoteInfo::new("upstream", "github.com", "upstream-org/widgets"),
        ]
    );

    // 3. A branch without upstream reports its local name
    git_repository::commit_empty(root, "initial");
    git_repository::checkout_new_branch(root, "feature/login");
    assert_eq!(git.current_upstream_branch().unwrap(), "feature/login");

    // 4. With an upstream, the remote branch name wins
    git_repository::set_upstream(root, "feature/login", "origin", "login");
    assert_eq!(git.current_upstream_branch().unwrap(), "login");
}

#[test]
fn directory_outside_repository_is_not_a_worktree() {
    let ctx = TestContext::new();
    let git = Git2RemoteInspector::new(ctx.home().to_path_buf());

    assert!(!git.is_inside_worktree().unwrap());
}
