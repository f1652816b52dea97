use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_host_remote_is_not_a_target() {
    let ctx = TestContext::new();
    ctx.add_remote("origin", "https://gitlab.example.com/acme/widgets.git");

    ctx.cli()
        .arg("issue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching remote repository found"));
}

#[test]
fn new_domain_is_registered_even_when_token_prompt_fails() {
    let ctx = TestContext::new();
    ctx.add_remote("origin", "git@github.com:acme/widgets.git");

    ctx.cli()
        .arg("issue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read private token"));

    let config = ctx.read_config();
    let profile = &config["profiles"]["github.com"];
    assert_eq!(profile["token"].as_str(), Some(""));
}

#[test]
fn configured_remote_host_outside_brand_is_accepted() {
    let ctx = TestContext::new();
    ctx.write_config(
        r#"
[profiles."git.internal.example"]
token = ""
"#,
    );
    ctx.add_remote("origin", "https://git.internal.example/team/service.git");

    // the host is known, so resolution reaches the token prompt
    ctx.cli()
        .arg("release")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read private token"))
        .stderr(predicate::str::contains("No matching remote").not());
}

#[test]
fn missing_named_profile_fails() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.home())
        .args(["issue", "--profile", "work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'work' not found in config"));
}

#[test]
fn project_without_domain_fails() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.home())
        .args(["issue", "--project", "acme/widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot determine the host for project 'acme/widgets'"));
}

#[test]
fn nothing_resolved_outside_repository_asks_for_project() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.home())
        .arg("pull-request")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --project owner/name"));
}

#[test]
fn malformed_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("profiles = [");

    ctx.cli_in(ctx.home())
        .arg("issue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
