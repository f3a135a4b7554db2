#![allow(clippy::unwrap_used)]

use predicates::prelude::{
    predicate::str::{contains, is_empty},
    PredicateBooleanExt,
};


use test_context::TestContext;

#[test]
fn test_profile_arg() {
    // --profile wins over WENOTE_PROFILE
    let ctx = TestContext::new();

    ctx.command()
        .env("WENOTE_PROFILE", "wrong_profile")
        .args(["--profile", "test_profile_arg"])
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains(r#""profile_name": "test_profile_arg""#)
                .and(contains(r#""profile_exists": false"#)),
        )
        .stderr(is_empty());
}

#[test]
fn test_api_url_env() {
    let ctx = TestContext::new();

    ctx.command()
        .env("WENOTE_API_URL", "https://notes.example.com/api/v1")
        .arg("config")
        .assert()
        .success()
        .stdout(contains(r#""api_url": "https://notes.example.com/api/v1""#));
}

#[test]
fn test_profile_file_is_read() {
    let ctx = TestContext::new();
    ctx.write_profile("api_url = \"http://profile.example/api/v1\"\npage_size = 50\n");

    ctx.command()
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains(r#""profile_exists": true"#)
                .and(contains(r#""api_url": "http://profile.example/api/v1""#))
                .and(contains(r#""page_size": 50"#))
                .and(contains(r#""timeout_secs": 40"#)),
        );
}

#[test]
fn test_invalid_view_is_rejected() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["note", "list", "--view", "archive"])
        .assert()
        .failure()
        .stderr(contains("Invalid view 'archive'"));
}

#[test]
fn test_whoami_without_session() {
    let ctx = TestContext::new();

    ctx.command()
        .arg("whoami")
        .assert()
        .failure()
        .stderr(contains("Not signed in"));
}

#[test]
fn test_logout_removes_token() {
    let ctx = TestContext::new();
    ctx.write_token("abc.def.ghi");

    ctx.command().arg("logout").assert().success();

    assert!(!ctx.token_path().exists());
}

#[test]
fn test_completions() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("wenote"));
}
