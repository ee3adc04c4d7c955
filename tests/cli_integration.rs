//! CLI integration tests
//!
//! Tests the CLI behavior of both resolve and check modes against real
//! child-process environments.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Resolve-mode command with the resolver-relevant environment scrubbed,
/// so the ambient test environment cannot leak into assertions.
fn resolve_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("cms-plugins");
    for key in [
        "CMS_TIER",
        "PLUGINS_CONFIG",
        "RUST_LOG",
        "LOG_LEVEL",
        "R2_ACCESS_KEY_ID",
        "R2_ACCESS_SECRET",
        "R2_ENDPOINT",
        "R2_REGION",
        "R2_BUCKET",
        "R2_ACCOUNT_ID",
        "R2_PUBLIC_URL",
        "SMTP_HOST",
        "SMTP_PORT",
        "SMTP_USERNAME",
        "SMTP_PASSWORD",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("cms-plugins");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("cms-plugins");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tier"))
        .stdout(predicate::str::contains("pretty"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_resolve_defaults_to_production_tier() {
    let mut cmd = resolve_cmd();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"shadowCRUD\":false"))
        .stdout(predicate::str::contains("\"landingPage\":false"))
        .stdout(predicate::str::contains("\"depthLimit\":8"))
        .stdout(predicate::str::contains("\"amountLimit\":100"));
}

#[test]
fn test_resolve_development_tier_flag() {
    let mut cmd = resolve_cmd();
    cmd.args(["--tier", "development"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"shadowCRUD\":true"))
        .stdout(predicate::str::contains("\"landingPage\":true"));
}

#[test]
fn test_resolve_tier_env_var() {
    let mut cmd = resolve_cmd();
    cmd.env("CMS_TIER", "development");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"shadowCRUD\":true"));
}

#[test]
fn test_resolve_passes_environment_through() {
    let mut cmd = resolve_cmd();
    cmd.env("R2_BUCKET", "media");
    cmd.env("SMTP_HOST", "mail.internal");
    cmd.env("SMTP_PORT", "2525");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"Bucket\":\"media\""))
        .stdout(predicate::str::contains("\"host\":\"mail.internal\""))
        .stdout(predicate::str::contains("\"port\":2525"));
}

#[test]
fn test_resolve_applies_smtp_defaults() {
    let mut cmd = resolve_cmd();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"host\":\"smtp.gmail.com\""))
        .stdout(predicate::str::contains("\"port\":587"));
}

#[test]
fn test_resolve_pretty_output() {
    let mut cmd = resolve_cmd();
    cmd.arg("--pretty");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Pretty output spans multiple lines and still parses as JSON
    assert!(stdout.lines().count() > 3);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.get("upload").is_some());
}

#[test]
fn test_resolve_output_is_valid_json() {
    let mut cmd = resolve_cmd();
    cmd.env("R2_ACCESS_KEY_ID", "AKIA123");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON mapping");

    assert_eq!(
        parsed["upload"]["config"]["providerOptions"]["accessKeyId"],
        "AKIA123"
    );
}

#[test]
fn test_resolve_rejects_unknown_tier() {
    let mut cmd = resolve_cmd();
    cmd.args(["--tier", "staging"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn test_resolve_rejects_malformed_smtp_port() {
    let mut cmd = resolve_cmd();
    cmd.env("SMTP_PORT", "not-a-port");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("SMTP_PORT"));
}

#[test]
fn test_check_succeeds_on_full_environment() {
    let mut cmd = resolve_cmd();
    cmd.arg("check");
    cmd.env("R2_ACCESS_KEY_ID", "AKIA123");
    cmd.env("R2_ACCESS_SECRET", "s3cr3t");
    cmd.env("R2_BUCKET", "media");
    cmd.env("SMTP_USERNAME", "mailer");
    cmd.env("SMTP_PASSWORD", "hunter2");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("valid"));
}

#[test]
fn test_check_warns_on_missing_credentials() {
    let mut cmd = resolve_cmd();
    cmd.arg("check");

    // Missing credentials are a deferred failure: warned about, not fatal
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("R2_ACCESS_KEY_ID"))
        .stderr(predicate::str::contains("SMTP_USERNAME"));
}

#[test]
fn test_check_fails_on_malformed_public_url() {
    let mut cmd = resolve_cmd();
    cmd.args(["check", "--tier", "development"]);
    cmd.env("R2_PUBLIC_URL", "not a url");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("R2_PUBLIC_URL"));
}

#[test]
fn test_check_fails_on_zero_smtp_port() {
    let mut cmd = resolve_cmd();
    cmd.arg("check");
    cmd.env("SMTP_PORT", "0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("SMTP_PORT"));
}
