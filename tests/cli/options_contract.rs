use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_unknown_sort_before_resolving_target() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["issue", "--sort", "stars"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort option 'stars'"));

    assert!(!ctx.config_path().exists(), "parse errors must not touch the config");
}

#[test]
fn rejects_merged_state_for_issues() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["issue", "--states", "merged"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid issue state option 'merged'"));
}

#[test]
fn rejects_unknown_release_sort() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["release", "--sort", "comments"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected one of CREATED_AT, NAME"));
}
