use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands_and_global_options() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("issue"))
        .stdout(predicate::str::contains("pull-request"))
        .stdout(predicate::str::contains("release"))
        .stdout(predicate::str::contains("--project"))
        .stdout(predicate::str::contains("--profile"));
}

#[test]
fn pull_request_alias_is_accepted() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["pr", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merged"));
}
